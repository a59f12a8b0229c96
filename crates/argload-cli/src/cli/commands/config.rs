//! `argload config` – show config location and the URL-following state.

use anyhow::Result;
use argload_core::config::{self, FollowUrlParam, ScopedConfig, FOLLOW_URLPARAM_KEY};

pub fn run_config(cfg: &ScopedConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!(
        "{}: {}",
        FOLLOW_URLPARAM_KEY,
        describe_follow_urlparam(cfg.follow_urlparam())
    );
    Ok(())
}

pub(crate) fn describe_follow_urlparam(state: FollowUrlParam) -> &'static str {
    match state {
        FollowUrlParam::Unset => "unset (http:// and https:// values are fetched)",
        FollowUrlParam::Enabled => "true (http:// and https:// values are fetched)",
        FollowUrlParam::Disabled => "false (only file:// and fileb:// values are loaded)",
    }
}
