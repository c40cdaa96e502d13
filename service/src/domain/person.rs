//! [`Person`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};

use super::{
    case,
    macros::{define_id, define_text},
};

/// Party of a [`Case`].
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Person {
    /// ID of this [`Person`].
    pub id: Id,

    /// ID of the [`Case`] this [`Person`] is a party of.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// [`Name`] of this [`Person`].
    pub name: Name,

    /// [`Role`] of this [`Person`] in the [`Case`], if known.
    ///
    /// [`Case`]: super::Case
    pub role: Option<Role>,

    /// [`Phone`] of this [`Person`], if known.
    pub phone: Option<Phone>,

    /// [`DateTime`] when this [`Person`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Person`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

define_id! {
    /// ID of a [`Person`].
    Id
}

define_text! {
    /// Name of a [`Person`].
    Name(max = 100)
}

define_kind! {
    #[doc = "Role of a [`Person`] in a case."]
    enum Role {
        #[doc = "Owes the debt the property is foreclosed for."]
        Debtor = 1,

        #[doc = "Is owed the debt."]
        Creditor = 2,
    }
}

define_text! {
    /// Phone number of a [`Person`], as written in the case file.
    ///
    /// Free form, so extensions and notes are kept as is.
    Phone(max = 30)
}

/// [`DateTime`] when a [`Person`] was created.
pub type CreationDateTime = DateTimeOf<(Person, unit::Creation)>;

/// [`DateTime`] when a [`Person`] was modified the last time.
pub type ModificationDateTime = DateTimeOf<(Person, unit::Modification)>;

#[cfg(test)]
mod spec {
    use super::{Phone, Role};

    #[test]
    fn keeps_phone_extensions_and_notes() {
        for number in [
            "0912345678",
            "02-2345-6789#123",
            "0912345678 (日)",
            "02 2345 6789 ext 5",
            "+886 912 345 678",
        ] {
            assert_eq!(Phone::new(number).unwrap().as_ref(), number);
        }
    }

    #[test]
    fn trims_phone() {
        let phone = Phone::new(" 02-2345-6789 ").unwrap();

        assert_eq!(phone.as_ref(), "02-2345-6789");
    }

    #[test]
    fn rejects_blank_or_overlong_phone() {
        assert!(Phone::new("").is_none());
        assert!(Phone::new("   ").is_none());
        assert!(Phone::new("0".repeat(Phone::MAX_LEN)).is_some());
        assert!(Phone::new("0".repeat(Phone::MAX_LEN + 1)).is_none());
    }

    #[test]
    fn role_uses_kebab_case() {
        assert_eq!(Role::Debtor.to_string(), "debtor");
        assert_eq!("creditor".parse::<Role>().unwrap(), Role::Creditor);
    }
}
