use std::collections::BTreeMap;

/// Per-network deployment configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkProfile {
    pub name: String,
    /// Development networks are local, disposable environments; they resolve
    /// their price feed from a freshly registered mock rather than this table.
    pub development: bool,
    /// Contract id of the price feed backing this network. Live networks
    /// without one cannot host the funding contract.
    pub price_feed: Option<String>,
}

impl NetworkProfile {
    pub fn live(name: &str, price_feed: &str) -> Self {
        Self {
            name: name.to_string(),
            development: false,
            price_feed: Some(price_feed.to_string()),
        }
    }

    pub fn development(name: &str) -> Self {
        Self {
            name: name.to_string(),
            development: true,
            price_feed: None,
        }
    }
}

/// Immutable name-to-profile table, fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct NetworkRegistry {
    profiles: BTreeMap<String, NetworkProfile>,
}

impl NetworkRegistry {
    pub fn new(profiles: impl IntoIterator<Item = NetworkProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.name.clone(), profile))
                .collect(),
        }
    }

    /// The default table: public networks with their SEP-40 feed contracts,
    /// plus the local development networks.
    pub fn well_known() -> Self {
        Self::new([
            NetworkProfile::live(
                "testnet",
                "CAVLP5DH2GJPZMVO7IJY4CVOD5MWEFTJFVPD2YY2FQXOQHRGHK4D6HLP",
            ),
            NetworkProfile::live(
                "mainnet",
                "CALI2BYU2JE6WVRUFYTS6MSBNEHGJ35P4AVCZYF3B6QOE3QKOB2PLE6M",
            ),
            // No feed deployed on futurenet yet
            NetworkProfile {
                name: "futurenet".to_string(),
                development: false,
                price_feed: None,
            },
            NetworkProfile::development("local"),
            NetworkProfile::development("standalone"),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.get(name)
    }
}
