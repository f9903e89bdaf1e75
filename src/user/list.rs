use bon::Builder;

use super::User;

// An absent sequence and a present-but-empty one are distinct states: `{}`
// and `{"users": null}` read back as absent, `{"users": []}` as empty.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(any(test, feature = "fake"), derive(fake::Dummy))]
pub struct List {
    users: Option<Vec<User>>,
}

impl List {
    pub fn users(&self) -> Option<&[User]> {
        self.users.as_deref()
    }
}

mod serde {
    use std::fmt;

    use ::serde::de::{self, IgnoredAny, MapAccess, Visitor};
    use ::serde::ser::SerializeStruct;
    use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::*;

    impl Serialize for List {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut object =
                serializer.serialize_struct("List", usize::from(self.users.is_some()))?;
            match &self.users {
                Some(users) => object.serialize_field("users", users)?,
                None => object.skip_field("users")?,
            }
            object.end()
        }
    }

    enum Field {
        Users,
        Unknown,
    }

    impl<'de> Deserialize<'de> for Field {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct FieldVisitor;

            impl<'de> Visitor<'de> for FieldVisitor {
                type Value = Field;

                fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str("a field name")
                }

                fn visit_str<E>(self, name: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(match name {
                        "users" => Field::Users,
                        _ => Field::Unknown,
                    })
                }
            }

            deserializer.deserialize_identifier(FieldVisitor)
        }
    }

    impl<'de> Deserialize<'de> for List {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct ListVisitor;

            impl<'de> Visitor<'de> for ListVisitor {
                type Value = List;

                fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str("a users object")
                }

                fn visit_map<A>(self, mut object: A) -> Result<Self::Value, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut users = None;
                    while let Some(field) = object.next_key::<Field>()? {
                        match field {
                            Field::Users => users = object.next_value::<Option<Vec<User>>>()?,
                            Field::Unknown => {
                                object.next_value::<IgnoredAny>()?;
                            }
                        }
                    }
                    Ok(List { users })
                }
            }

            deserializer.deserialize_struct("List", &["users"], ListVisitor)
        }
    }
}
