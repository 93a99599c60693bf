//! Deploy contracts to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional protocol parameters (defaults in parentheses):
//!   COLLATERAL_RATIO (1)
//!   COLLATERAL_TAX_RATE (5)
//!   COLLATERAL_DEPOSIT_FEE_BPS (0)
//!   COLLATERAL_SUPPLY_CAP_TOKENS (1000000)
//!   COLLATERAL_INITIAL_PRICE (200000000000)
//!
//! The wrapped CSPR token has no wrapping entry point. The deployer is its
//! admin and funds accounts with `add_minter` + `mint` when needed.

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::*;

use collateral_mint_contracts::converter::{SCALE, TOKEN_DECIMALS};
use collateral_mint_contracts::ledger::{CollateralLedger, CollateralLedgerInitArgs};
use collateral_mint_contracts::price_feed::{ManualPriceFeed, ManualPriceFeedInitArgs};
use collateral_mint_contracts::token::{CollateralToken, CollateralTokenInitArgs};
use collateral_mint_contracts::types::ProtocolParameters;

/// Deployment settings read from the environment
struct DeployConfig {
    payment_amount: u64,
    ratio: u32,
    tax_rate: u8,
    deposit_fee_bps: u32,
    supply_cap_tokens: u64,
    initial_price: i64,
}

impl DeployConfig {
    fn from_env() -> Self {
        Self {
            payment_amount: env_or("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT", 200_000_000_000),
            ratio: env_or("COLLATERAL_RATIO", 1),
            tax_rate: env_or("COLLATERAL_TAX_RATE", 5),
            deposit_fee_bps: env_or("COLLATERAL_DEPOSIT_FEE_BPS", 0),
            supply_cap_tokens: env_or("COLLATERAL_SUPPLY_CAP_TOKENS", 1_000_000),
            initial_price: env_or("COLLATERAL_INITIAL_PRICE", 200_000_000_000),
        }
    }

    fn protocol_parameters(&self) -> ProtocolParameters {
        ProtocolParameters {
            ratio: self.ratio,
            tax_rate: self.tax_rate,
            deposit_fee_bps: self.deposit_fee_bps,
            supply_cap: U256::from(self.supply_cap_tokens) * U256::from(SCALE),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== Collateral Mint Livenet Deployment ===");
    println!();

    let config = DeployConfig::from_env();
    let params = config.protocol_parameters();
    if let Err(err) = params.validate() {
        eprintln!("Invalid protocol parameters: {}", err);
        std::process::exit(1);
    }

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();
    env.set_gas(config.payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!(
        "Parameters: ratio={} tax_rate={}% deposit_fee_bps={} supply_cap={} tokens",
        params.ratio, params.tax_rate, params.deposit_fee_bps, config.supply_cap_tokens
    );
    println!();

    // ==================== Phase 1: Tokens and Feed ====================
    println!("=== Phase 1: Deploying Tokens and Price Feed ===");
    println!();

    println!("Deploying issued CollateralToken...");
    let mut token = CollateralToken::deploy(
        &env,
        CollateralTokenInitArgs {
            name: String::from("Collateral Mint Token"),
            symbol: String::from("CMT"),
            decimals: TOKEN_DECIMALS,
            admin: deployer,
        },
    );
    let token_addr = token.address().clone();
    println!("CollateralToken deployed at: {:?}", token_addr);

    println!("Deploying wrapped CSPR CollateralToken...");
    let wrapped = CollateralToken::deploy(
        &env,
        CollateralTokenInitArgs {
            name: String::from("Wrapped CSPR"),
            symbol: String::from("WCSPR"),
            decimals: TOKEN_DECIMALS,
            admin: deployer,
        },
    );
    let wrapped_addr = wrapped.address().clone();
    println!("Wrapped CSPR deployed at: {:?}", wrapped_addr);

    println!("Deploying ManualPriceFeed...");
    let feed = ManualPriceFeed::deploy(
        &env,
        ManualPriceFeedInitArgs {
            operator: deployer,
            initial_price: config.initial_price,
        },
    );
    let feed_addr = feed.address().clone();
    println!("ManualPriceFeed deployed at: {:?}", feed_addr);
    println!();

    // ==================== Phase 2: Ledger ====================
    println!("=== Phase 2: Deploying CollateralLedger ===");
    println!();

    let ledger = CollateralLedger::deploy(
        &env,
        CollateralLedgerInitArgs {
            owner: deployer,
            token: token_addr,
            wrapped_token: wrapped_addr,
            price_feed: feed_addr,
            params,
        },
    );
    let ledger_addr = ledger.address().clone();
    println!("CollateralLedger deployed at: {:?}", ledger_addr);
    println!();

    // ==================== Phase 3: Wiring ====================
    println!("=== Phase 3: Authorizing Ledger ===");
    token.add_minter(ledger_addr);
    println!("Ledger authorized as CollateralToken minter");
    println!("Wrapped CSPR is admin-minted: fund holders from the deployer account");
    println!();

    println!("=== Deployment Complete ===");
    println!("Token:    {:?}", token_addr);
    println!("Wrapped:  {:?}", wrapped_addr);
    println!("Feed:     {:?}", feed_addr);
    println!("Ledger:   {:?}", ledger_addr);
}
