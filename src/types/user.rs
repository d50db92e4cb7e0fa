use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque user identifier.
///
/// The API may key users by number or by string; the identifier is carried
/// verbatim in whichever form it arrived and only ever rendered into paths.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for UserId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only canonical integers become numbers; "007" or "+5" stay as typed
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => Ok(UserId::Number(n)),
            _ => Ok(UserId::Text(s.to_string())),
        }
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

/// The record shape exchanged between every layer and with the API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_from_str_prefers_number() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::Number(42));
        assert_eq!(
            "a1b2".parse::<UserId>().unwrap(),
            UserId::Text("a1b2".to_string())
        );
    }

    #[test]
    fn test_user_id_from_str_keeps_non_canonical_digits() {
        for raw in ["007", "+5", "0x1f", "18446744073709551616"] {
            let id = raw.parse::<UserId>().unwrap();
            assert_eq!(id, UserId::Text(raw.to_string()));
            assert_eq!(id.to_string(), raw);
        }
        assert_eq!("0".parse::<UserId>().unwrap(), UserId::Number(0));
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::Number(7).to_string(), "7");
        assert_eq!(UserId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_dto_uses_wire_keys() {
        let dto = UserDto {
            id: UserId::Number(1),
            name: "john doe".to_string(),
            email: "john@example.com".to_string(),
            is_active: true,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": 1,
                "name": "john doe",
                "email": "john@example.com",
                "isActive": true
            })
        );
    }

    #[test]
    fn test_dto_accepts_string_id() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": "u-9",
            "name": "Ann",
            "email": "ann@example.com",
            "isActive": false
        }))
        .unwrap();
        assert_eq!(dto.id, UserId::from("u-9"));
    }
}
