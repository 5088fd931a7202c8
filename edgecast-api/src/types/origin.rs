use serde::{Deserialize, Serialize};

/// Delivery platform an origin or CNAME belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    HttpLarge,
    HttpSmall,
    Adn,
}

impl MediaType {
    /// Path segment used by the origin endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HttpLarge => "httplarge",
            Self::HttpSmall => "httpsmall",
            Self::Adn => "adn",
        }
    }

    /// Numeric platform id used in CNAME payloads.
    pub fn id(self) -> i32 {
        match self {
            Self::HttpLarge => 3,
            Self::HttpSmall => 8,
            Self::Adn => 14,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            3 => Some(Self::HttpLarge),
            8 => Some(Self::HttpSmall),
            14 => Some(Self::Adn),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "httplarge" => Ok(Self::HttpLarge),
            "httpsmall" => Ok(Self::HttpSmall),
            "adn" => Ok(Self::Adn),
            other => Err(format!("unknown media type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OriginHostname {
    pub name: String,
    pub is_primary: i32,
    pub ordinal: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldPop {
    #[serde(rename = "POPCode")]
    pub pop_code: String,
    #[serde(rename = "Name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// A customer origin: the hostnames the CDN pulls content from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Origin {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub directory_name: String,
    pub host_header: String,
    pub http_hostnames: Vec<OriginHostname>,
    /// `PF` (primary/failover) or `RR` (round robin).
    pub http_load_balancing: String,
    pub https_hostnames: Vec<OriginHostname>,
    pub https_load_balancing: String,
    /// `1` default, `2` prefer IPv6, `3` prefer IPv4, `4` IPv4 only, `5` IPv6 only.
    pub network_configuration: i32,
    #[serde(rename = "ShieldPOPs")]
    pub shield_pops: Vec<ShieldPop>,
    #[serde(rename = "ValidationURL")]
    pub validation_url: String,
    /// Read-only CDN path of the origin.
    #[serde(skip_serializing)]
    pub origin_url: String,
}

/// Create/update response of the origin endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginCreated {
    pub customer_origin_id: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &i64) -> bool {
    *v == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_round_trips_names_and_ids() {
        for media in [MediaType::HttpLarge, MediaType::HttpSmall, MediaType::Adn] {
            assert_eq!(media.as_str().parse::<MediaType>(), Ok(media));
            assert_eq!(MediaType::from_id(media.id()), Some(media));
        }
        assert!("flash".parse::<MediaType>().is_err());
    }

    #[test]
    fn origin_payload_field_names() {
        let origin = Origin {
            directory_name: "images".into(),
            host_header: "images.example.com:80".into(),
            http_hostnames: vec![OriginHostname {
                name: "http://origin1.example.com:80".into(),
                ..OriginHostname::default()
            }],
            http_load_balancing: "PF".into(),
            shield_pops: vec![ShieldPop {
                pop_code: "LAA".into(),
                name: String::new(),
            }],
            validation_url: "http://origin1.example.com/health".into(),
            ..Origin::default()
        };
        let json = serde_json::to_value(&origin).unwrap();
        assert!(json.get("Id").is_none());
        assert_eq!(json["ShieldPOPs"][0]["POPCode"], "LAA");
        assert!(json["ShieldPOPs"][0].get("Name").is_none());
        assert_eq!(json["ValidationURL"], "http://origin1.example.com/health");
        assert_eq!(json["HttpHostnames"][0]["Name"], "http://origin1.example.com:80");
    }
}
