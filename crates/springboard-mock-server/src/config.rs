//! Command-line configuration for the mock server.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use clap::Parser;
use springboard_ledger::types::{is_representable, MAX_SCALE};
use springboard_ledger::{BalanceStore, Profile, ProfileKind};

/// Springboard Retail webhooks mock API server
#[derive(Parser, Debug)]
#[command(name = "springboard-mock")]
#[command(version, about, long_about = None)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Deployment profile to impersonate
    #[arg(long, value_name = "PROFILE", default_value = "numeric")]
    pub profile: ProfileKind,

    /// Seed balance (can be specified multiple times). Replaces the
    /// profile's default cards when given.
    #[arg(long = "seed", value_name = "NUMBER=BALANCE", value_parser = parse_seed)]
    pub seeds: Vec<(String, BigDecimal)>,

    /// Override the profile's check_balance card number length limit
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub profile_kind: ProfileKind,
    pub profile: Profile,
    pub seed: Vec<(String, BigDecimal)>,
}

impl ServerArgs {
    pub fn into_config(self) -> ServerConfig {
        let mut profile = self.profile.profile();
        if self.max_length.is_some() {
            profile.check_balance_max_length = self.max_length;
        }

        let seed = if self.seeds.is_empty() {
            self.profile.default_seed()
        } else {
            self.seeds
        };

        ServerConfig {
            addr: SocketAddr::new(self.host, self.port),
            profile_kind: self.profile,
            profile,
            seed,
        }
    }
}

impl ServerConfig {
    /// Builds a fresh balance store from the configured seed.
    pub fn store(&self) -> BalanceStore {
        BalanceStore::with_seed(self.seed.iter().cloned())
    }
}

/// Parses a `NUMBER=BALANCE` seed entry.
pub fn parse_seed(entry: &str) -> Result<(String, BigDecimal), String> {
    let (number, balance) = entry
        .split_once('=')
        .ok_or_else(|| format!("Invalid seed '{}': expected NUMBER=BALANCE", entry))?;

    let number = number.trim();
    if number.is_empty() {
        return Err(format!("Invalid seed '{}': card number is empty", entry));
    }

    let balance = BigDecimal::from_str(balance.trim())
        .map_err(|e| format!("Invalid seed '{}': bad balance: {}", entry, e))?;
    if balance < BigDecimal::from(0) {
        return Err(format!("Invalid seed '{}': balance must not be negative", entry));
    }
    if !is_representable(&balance) {
        return Err(format!(
            "Invalid seed '{}': balance must be a finite number with at most {} decimal places",
            entry, MAX_SCALE
        ));
    }

    Ok((number.to_string(), balance))
}
