//! Usage category taxonomy.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use oli_model::CategoryEntry;

/// Catch-all category offered when nothing else is close.
pub const DEFAULT_CATEGORY: &str = "other";

/// (id, name, description, main category).
const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    // Cross-chain
    (
        "bridge",
        "Bridge",
        "Contracts that lock, mint or release assets to move them between chains",
        "cross_chain",
    ),
    (
        "cc_communication",
        "Cross-Chain Communication",
        "Messaging layers that relay arbitrary data between chains",
        "cross_chain",
    ),
    // DeFi
    (
        "dex",
        "Decentralized Exchange",
        "Automated market makers, order books and swap aggregators",
        "defi",
    ),
    (
        "lending",
        "Lending",
        "Money markets for borrowing and lending assets against collateral",
        "defi",
    ),
    (
        "derivative",
        "Derivative Exchange",
        "Perpetuals, options and other derivative trading venues",
        "defi",
    ),
    (
        "staking",
        "Staking",
        "Liquid staking, restaking and validator deposit contracts",
        "defi",
    ),
    (
        "yield_vaults",
        "Yield Vaults",
        "Vaults that automate yield strategies on deposited assets",
        "defi",
    ),
    (
        "rwa",
        "Real World Assets",
        "Tokenized treasuries, credit and other off-chain assets",
        "defi",
    ),
    (
        "insurance",
        "Insurance",
        "Cover and risk pools protecting against protocol failure",
        "defi",
    ),
    // CeFi
    (
        "cex",
        "Centralized Exchange",
        "Deposit and hot wallets operated by centralized exchanges",
        "cefi",
    ),
    (
        "trading",
        "Trading",
        "Trading bots, MEV searchers and market making infrastructure",
        "cefi",
    ),
    // NFT
    (
        "nft_marketplace",
        "NFT Marketplace",
        "Venues for listing, bidding and settling NFT trades",
        "nft",
    ),
    (
        "non_fungible_tokens",
        "Non-Fungible Tokens",
        "ERC-721 and ERC-1155 collections",
        "nft",
    ),
    (
        "nft_fi",
        "NFTfi",
        "Lending, fractionalization and derivatives on NFTs",
        "nft",
    ),
    // Token transfers
    (
        "fungible_tokens",
        "Fungible Tokens",
        "ERC-20 token contracts and their transfers",
        "token_transfers",
    ),
    (
        "stablecoin",
        "Stablecoin",
        "Fiat-backed, crypto-backed and algorithmic stable assets",
        "token_transfers",
    ),
    (
        "native_transfer",
        "Native Transfer",
        "Plain transfers of the chain's native gas token",
        "token_transfers",
    ),
    // Social
    (
        "community",
        "Community",
        "DAOs, governance and community treasuries",
        "social",
    ),
    (
        "social",
        "Social",
        "Social graphs, messaging and content platforms",
        "social",
    ),
    (
        "identity",
        "Identity",
        "Naming services, attestations and proof of personhood",
        "social",
    ),
    // Gaming
    (
        "gaming",
        "Gaming",
        "On-chain games and game asset contracts",
        "gaming",
    ),
    (
        "gambling",
        "Gambling",
        "Betting, lotteries and prediction markets",
        "gaming",
    ),
    // Utility
    (
        "erc4337",
        "Account Abstraction",
        "ERC-4337 entry points, bundlers and paymasters",
        "utility",
    ),
    (
        "oracle",
        "Oracle",
        "Price feeds and off-chain data delivery",
        "utility",
    ),
    (
        "privacy",
        "Privacy",
        "Mixers, shielded pools and private transfer protocols",
        "utility",
    ),
    (
        "developer_tools",
        "Developer Tools",
        "Deployers, multicall, factories and other developer infrastructure",
        "utility",
    ),
    (
        "middleware",
        "Middleware",
        "Automation, keepers and indexing infrastructure",
        "utility",
    ),
    (
        "payments",
        "Payments",
        "Streaming payments, invoicing and merchant settlement",
        "utility",
    ),
    (
        "airdrop",
        "Airdrop",
        "Token distribution and claim contracts",
        "utility",
    ),
    (
        "other",
        "Other",
        "Anything that does not fit another category",
        "unlabeled",
    ),
];

/// Lowercased synonym -> category id.
static CATEGORY_ALIASES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();

    // Exchanges
    map.insert("defi", "dex");
    map.insert("exchange", "dex");
    map.insert("swap", "dex");
    map.insert("swaps", "dex");
    map.insert("amm", "dex");
    map.insert("aggregator", "dex");
    map.insert("decentralized exchange", "dex");
    map.insert("centralized exchange", "cex");
    map.insert("exchange wallet", "cex");
    map.insert("perps", "derivative");
    map.insert("perpetuals", "derivative");
    map.insert("derivatives", "derivative");
    map.insert("options", "derivative");

    // Lending and yield
    map.insert("lend", "lending");
    map.insert("borrow", "lending");
    map.insert("money market", "lending");
    map.insert("vault", "yield_vaults");
    map.insert("vaults", "yield_vaults");
    map.insert("yield", "yield_vaults");
    map.insert("liquid staking", "staking");
    map.insert("restaking", "staking");

    // Cross-chain
    map.insert("bridges", "bridge");
    map.insert("messaging", "cc_communication");
    map.insert("cross chain", "cc_communication");

    // Tokens
    map.insert("nft", "non_fungible_tokens");
    map.insert("nfts", "non_fungible_tokens");
    map.insert("erc721", "non_fungible_tokens");
    map.insert("marketplace", "nft_marketplace");
    map.insert("token", "fungible_tokens");
    map.insert("tokens", "fungible_tokens");
    map.insert("erc20", "fungible_tokens");
    map.insert("stablecoins", "stablecoin");
    map.insert("stable", "stablecoin");

    // Utility
    map.insert("account abstraction", "erc4337");
    map.insert("aa", "erc4337");
    map.insert("4337", "erc4337");
    map.insert("paymaster", "erc4337");
    map.insert("oracles", "oracle");
    map.insert("mixer", "privacy");
    map.insert("dev tools", "developer_tools");
    map.insert("infrastructure", "developer_tools");
    map.insert("mev", "trading");
    map.insert("bot", "trading");
    map.insert("dao", "community");
    map.insert("governance", "community");
    map.insert("game", "gaming");
    map.insert("games", "gaming");
    map.insert("betting", "gambling");

    map
});

pub fn categories() -> Vec<CategoryEntry> {
    CATEGORIES
        .iter()
        .map(|(id, name, description, main_category)| CategoryEntry {
            id: (*id).to_string(),
            name: (*name).to_string(),
            description: (*description).to_string(),
            main_category: (*main_category).to_string(),
        })
        .collect()
}

pub fn category_aliases() -> BTreeMap<String, String> {
    CATEGORY_ALIASES
        .iter()
        .map(|(alias, id)| ((*alias).to_string(), (*id).to_string()))
        .collect()
}
