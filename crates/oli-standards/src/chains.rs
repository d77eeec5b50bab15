//! Supported chains and their common aliases.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use oli_model::ChainEntry;

/// CAIP-2 namespace used for all supported chains.
pub const CHAIN_NAMESPACE: &str = "eip155";

/// (chain number, short id, display name).
const CHAINS: &[(u64, &str, &str)] = &[
    (1, "ethereum", "Ethereum"),
    (10, "optimism", "OP Mainnet"),
    (56, "bsc", "BNB Smart Chain"),
    (130, "unichain", "Unichain"),
    (137, "polygon", "Polygon PoS"),
    (169, "manta", "Manta Pacific"),
    (204, "opbnb", "opBNB"),
    (252, "fraxtal", "Fraxtal"),
    (291, "orderly", "Orderly Network"),
    (324, "zksync_era", "ZKsync Era"),
    (480, "worldchain", "World Chain"),
    (1101, "polygon_zkevm", "Polygon zkEVM"),
    (1868, "soneium", "Soneium"),
    (5000, "mantle", "Mantle"),
    (7560, "cyber", "Cyber"),
    (8453, "base", "Base"),
    (34443, "mode", "Mode"),
    (42161, "arbitrum", "Arbitrum One"),
    (42170, "arbitrum_nova", "Arbitrum Nova"),
    (57073, "ink", "Ink"),
    (59144, "linea", "Linea"),
    (60808, "bob", "BOB"),
    (81457, "blast", "Blast"),
    (534352, "scroll", "Scroll"),
    (7777777, "zora", "Zora"),
    (11155111, "sepolia", "Sepolia"),
];

/// Lowercased synonym -> CAIP-2 id.
///
/// Short ids and display names are matched separately; this table only holds
/// spellings that appear in user files but are neither.
static CHAIN_ALIASES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();

    // Ethereum mainnet
    map.insert("eth", "eip155:1");
    map.insert("mainnet", "eip155:1");
    map.insert("ethereum mainnet", "eip155:1");
    map.insert("eth mainnet", "eip155:1");
    map.insert("l1", "eip155:1");

    // OP stack
    map.insert("op", "eip155:10");
    map.insert("op mainnet", "eip155:10");
    map.insert("optimism mainnet", "eip155:10");
    map.insert("base mainnet", "eip155:8453");
    map.insert("zora network", "eip155:7777777");
    map.insert("mode network", "eip155:34443");
    map.insert("world", "eip155:480");
    map.insert("world chain", "eip155:480");
    map.insert("worldcoin", "eip155:480");
    map.insert("frax", "eip155:252");
    map.insert("cyber l2", "eip155:7560");

    // Arbitrum
    map.insert("arb", "eip155:42161");
    map.insert("arb1", "eip155:42161");
    map.insert("arbitrum one", "eip155:42161");
    map.insert("arbitrum mainnet", "eip155:42161");
    map.insert("nova", "eip155:42170");

    // zk rollups
    map.insert("zksync", "eip155:324");
    map.insert("zk sync", "eip155:324");
    map.insert("zksync era", "eip155:324");
    map.insert("era", "eip155:324");
    map.insert("zkevm", "eip155:1101");
    map.insert("polygon zk evm", "eip155:1101");
    map.insert("scroll mainnet", "eip155:534352");
    map.insert("linea mainnet", "eip155:59144");

    // Sidechains and alt L1s
    map.insert("matic", "eip155:137");
    map.insert("polygon pos", "eip155:137");
    map.insert("polygon mainnet", "eip155:137");
    map.insert("bnb", "eip155:56");
    map.insert("bnb chain", "eip155:56");
    map.insert("binance smart chain", "eip155:56");
    map.insert("binance", "eip155:56");
    map.insert("manta pacific", "eip155:169");
    map.insert("mantle network", "eip155:5000");

    // Testnets
    map.insert("sepolia testnet", "eip155:11155111");
    map.insert("eth sepolia", "eip155:11155111");

    map
});

/// All supported chains in numeric order.
pub fn chains() -> Vec<ChainEntry> {
    CHAINS
        .iter()
        .map(|(number, short_id, name)| ChainEntry {
            caip2: format!("{CHAIN_NAMESPACE}:{number}"),
            short_id: (*short_id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

/// Alias table as owned strings, for [`oli_model::ReferenceDataset`].
pub fn chain_aliases() -> BTreeMap<String, String> {
    CHAIN_ALIASES
        .iter()
        .map(|(alias, caip2)| ((*alias).to_string(), (*caip2).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_targets_a_known_chain() {
        let known: Vec<String> = chains().into_iter().map(|chain| chain.caip2).collect();
        for (alias, target) in CHAIN_ALIASES.iter() {
            assert!(known.iter().any(|id| id.as_str() == *target), "alias {alias} -> unknown {target}");
            assert_eq!(*alias, alias.to_lowercase(), "alias {alias} must be lowercase");
        }
    }

    #[test]
    fn short_ids_are_unique() {
        let mut ids: Vec<&str> = CHAINS.iter().map(|(_, short, _)| *short).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CHAINS.len());
    }

    #[test]
    fn every_chain_uses_the_namespace() {
        for chain in chains() {
            assert_eq!(chain.namespace(), CHAIN_NAMESPACE, "{}", chain.caip2);
        }
        assert_eq!(chains()[0].caip2, "eip155:1");
    }
}
