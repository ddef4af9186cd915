use crate::derive::{Attribute, Reflect};

/// A human readable name for a type member.
///
/// Read by [`display_name`](crate::meta::display_name), which falls back to
/// the member's own name.
///
/// # Examples
///
/// ```
/// use fc_reflect::{derive::Reflect, meta::{self, DisplayName}};
///
/// #[derive(Reflect)]
/// struct Profile {
///     #[reflect(@DisplayName::new("E-mail address"))]
///     email: String,
///     phone: String,
/// }
///
/// let profile = Profile { email: String::new(), phone: String::new() };
/// assert_eq!(meta::display_name(&profile, "email"), Some("E-mail address"));
/// assert_eq!(meta::display_name(&profile, "phone"), Some("phone"));
/// assert_eq!(meta::display_name(&profile, "fax"), None);
/// ```
#[derive(Reflect, Attribute, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(type_path = "fc_reflect::meta::DisplayName")]
pub struct DisplayName {
    name: &'static str,
}

impl DisplayName {
    /// Creates a new [`DisplayName`].
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::DisplayName;
    use crate::derive::Reflect;
    use crate::meta;

    #[derive(Reflect)]
    struct Account {
        #[reflect(@DisplayName::new("Login"))]
        user: String,
        #[reflect(@DisplayName::new("Secret"), @DisplayName::new("Password"))]
        pass: String,
        #[reflect(@"masked")]
        pin: u32,
    }

    fn account() -> Account {
        Account {
            user: String::new(),
            pass: String::new(),
            pin: 0,
        }
    }

    #[test]
    fn single_display_name() {
        assert_eq!(meta::display_name(&account(), "user"), Some("Login"));
    }

    #[test]
    fn unrelated_attributes_fall_back_to_member_name() {
        assert_eq!(meta::display_name(&account(), "pin"), Some("pin"));
    }

    #[test]
    fn several_display_names_are_rejected() {
        let target = account();
        assert_eq!(meta::display_name(&target, "pass"), None);
        assert_eq!(
            meta::get_attribute::<DisplayName>(&target, "pass", false).map(DisplayName::name),
            Some("Secret")
        );
    }
}
