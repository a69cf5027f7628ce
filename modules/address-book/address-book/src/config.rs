use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret header check for the address routes.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub enabled: bool,
    /// Request header carrying the key
    pub header: String,
    #[serde(
        serialize_with = "serialize_redacted",
        deserialize_with = "deserialize_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<SecretString>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header: DEFAULT_API_KEY_HEADER.to_owned(),
            api_key: None,
        }
    }
}

impl AuthConfig {
    /// The configured key, if any, with surrounding whitespace trimmed and empty treated as unset.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().trim())
            .filter(|k| !k.is_empty())
    }
}

#[allow(clippy::ref_option)] // serde requires &T signature
fn serialize_redacted<S>(value: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(_) => serializer.serialize_str("[REDACTED]"),
        None => serializer.serialize_none(),
    }
}

// Env values and unquoted YAML scalars such as `123456` arrive as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<RawKey> for SecretString {
    fn from(raw: RawKey) -> Self {
        let text = match raw {
            RawKey::Text(s) => s,
            RawKey::Unsigned(n) => n.to_string(),
            RawKey::Signed(n) => n.to_string(),
            RawKey::Float(n) => n.to_string(),
        };
        SecretString::from(text)
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawKey>::deserialize(deserializer)?.map(SecretString::from))
}
