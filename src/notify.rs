use crate::models::{Properties, Property};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Receives the listings found in a polling cycle
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, properties: &[Property]) -> Result<()>;
}

/// Prints listings to stdout
pub struct ConsoleNotifier {
    json: bool,
}

impl ConsoleNotifier {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, properties: &[Property]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(properties)?);
            return Ok(());
        }

        for (i, property) in properties.iter().enumerate() {
            println!("{}. {} ({})", i + 1, property.kind, property.price_raw);
            println!("   {}", property.location);
            println!("   {} pcm / {} pw", property.price_per_month, property.price_per_week);
            if !property.date_added.is_empty() {
                println!("   Added: {}", property.date_added);
            }
            println!("   URL: {}", property.url);
            println!();
        }
        Ok(())
    }
}

/// Remembers identity hashes across cycles so each listing is announced once
///
/// The set is never pruned: it grows with every distinct listing for the life
/// of the process.
#[derive(Debug, Default)]
pub struct SeenFilter {
    seen: HashSet<String>,
}

impl SeenFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only listings not seen in this or any earlier cycle
    pub fn retain_new(&mut self, properties: Properties) -> Properties {
        let total = properties.len();
        let fresh: Properties = properties
            .into_iter()
            .filter(|p| self.seen.insert(p.identity_hash.clone()))
            .collect();

        debug!("{} of {} listings are new", fresh.len(), total);
        fresh
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
