use indexmap::IndexSet;
use serde::{Deserialize, Deserializer};
use serde_derive::{Deserialize as DeserializeDerive, Serialize};

/// Decides which interfaces take part in rate sampling.
///
/// The blacklist always wins: a blacklisted interface is excluded even if it
/// is also whitelisted. When `all_interfaces` is set (the default) every
/// non-blacklisted interface is eligible, and the whitelist is ignored.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
pub struct InterfaceFilter {
    #[serde(default = "InterfaceFilter::default_all_interfaces")]
    pub all_interfaces: bool,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub interfaces: IndexSet<String>,
    #[serde(
        default = "InterfaceFilter::default_blacklist",
        deserialize_with = "list_or_csv"
    )]
    pub interfaces_blacklist: IndexSet<String>,
}

impl Default for InterfaceFilter {
    fn default() -> Self {
        InterfaceFilter {
            all_interfaces: Self::default_all_interfaces(),
            interfaces: IndexSet::new(),
            interfaces_blacklist: Self::default_blacklist(),
        }
    }
}

impl InterfaceFilter {
    pub fn accepts(&self, name: &str) -> bool {
        if self.interfaces_blacklist.contains(name) {
            return false;
        }

        if self.all_interfaces {
            return true;
        }

        self.interfaces.contains(name)
    }

    fn default_all_interfaces() -> bool {
        true
    }

    fn default_blacklist() -> IndexSet<String> {
        IndexSet::from(["lo".to_string()])
    }
}

/// Interface lists may be given as a list of names or as a single comma
/// separated string.
fn list_or_csv<'de, D>(d: D) -> Result<IndexSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(DeserializeDerive)]
    #[serde(untagged)]
    enum Raw {
        List(IndexSet<String>),
        Csv(String),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::List(set) => set,
        Raw::Csv(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filter(json: serde_json::Value) -> InterfaceFilter {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn defaults() {
        let f = filter(json!({}));
        assert!(f.all_interfaces);
        assert!(f.interfaces.is_empty());
        assert!(f.interfaces_blacklist.contains("lo"));
    }

    #[test]
    fn blacklist_always_wins() {
        // `lo` is excluded by default no matter what else is configured
        let f = filter(json!({ "all_interfaces": true }));
        assert!(!f.accepts("lo"));
        assert!(f.accepts("eth0"));

        // blacklisted even when explicitly whitelisted
        let f = filter(json!({
            "all_interfaces": false,
            "interfaces": ["eth0"],
            "interfaces_blacklist": ["eth0"],
        }));
        assert!(!f.accepts("eth0"));
    }

    #[test]
    fn whitelist_only_when_not_all() {
        let f = filter(json!({
            "all_interfaces": false,
            "interfaces": ["eth0", "wlan0"],
        }));
        assert!(f.accepts("eth0"));
        assert!(f.accepts("wlan0"));
        assert!(!f.accepts("eth1"));
        assert!(!f.accepts("lo"));
    }

    #[test]
    fn csv_strings_are_split() {
        let f = filter(json!({
            "all_interfaces": false,
            "interfaces": "eth0, wlan0",
            "interfaces_blacklist": "lo,docker0",
        }));
        assert!(f.accepts("eth0"));
        assert!(f.accepts("wlan0"));
        assert!(!f.accepts("docker0"));
        assert!(!f.accepts("lo"));
    }
}
