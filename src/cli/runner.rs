//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::client::{Direction, HttpSource, LocalSource, PageSource, PageWalker, WalkResult};
use crate::config::{load_config, AppConfig};
use crate::cursor;
use crate::error::Result;
use crate::pagination::{ErrorResponse, PageResponse, Paginator, PolicyKind, RawPaginationArgs};
use crate::store::Collection;
use crate::types::RecordId;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve { host, port } => self.serve(host.as_deref(), *port).await,
            Commands::Page {
                policy,
                first,
                last,
                after,
                before,
                relay_id,
            } => {
                let args = RawPaginationArgs {
                    first: first.clone(),
                    last: last.clone(),
                    after: after.clone(),
                    before: before.clone(),
                    conversation_relay_id: relay_id.clone(),
                };
                self.page(*policy, &args)
            }
            Commands::Walk {
                policy,
                direction,
                page_size,
                url,
                relay_id,
            } => {
                self.walk(
                    *policy,
                    *direction,
                    *page_size,
                    url.as_deref(),
                    relay_id.as_deref(),
                )
                .await
            }
            Commands::Encode { id } => self.encode(*id),
            Commands::Decode { cursor } => self.decode(cursor),
        }
    }

    /// Load the config file, or defaults when none was given
    fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(AppConfig::default()),
        }
    }

    /// Build the collection the config describes
    fn load_collection(&self, config: &AppConfig) -> Result<Arc<Collection>> {
        Ok(Arc::new(config.seed.build()?))
    }

    async fn serve(&self, host: Option<&str>, port: Option<u16>) -> Result<()> {
        let config = self.load_config()?;
        let collection = self.load_collection(&config)?;
        tracing::info!("Serving {} projects", collection.len());

        let server = ServerConfig {
            host: host.map_or(config.server.host, String::from),
            port: port.unwrap_or(config.server.port),
            cors: config.server.cors,
        };
        serve(server, collection).await
    }

    fn page(&self, policy: PolicyKind, args: &RawPaginationArgs) -> Result<()> {
        let config = self.load_config()?;
        let collection = self.load_collection(&config)?;

        match Paginator::for_kind(policy).paginate(&collection, args) {
            Ok(data) => self.print(&PageResponse { data }),
            Err(e) => {
                self.print(&ErrorResponse {
                    error: e.to_string(),
                })?;
                Err(e)
            }
        }
    }

    async fn walk(
        &self,
        policy: PolicyKind,
        direction: Direction,
        page_size: Option<u32>,
        url: Option<&str>,
        relay_id: Option<&str>,
    ) -> Result<()> {
        let config = self.load_config()?;
        let page_size = page_size.unwrap_or(config.paging.default_page_size);
        let max_pages = config.paging.max_pages;

        let result = match url {
            Some(url) => {
                let source = HttpSource::for_policy(url, policy)?;
                walk_source(source, direction, page_size, max_pages, relay_id).await?
            }
            None => {
                let collection = self.load_collection(&config)?;
                let source = LocalSource::new(collection, policy);
                walk_source(source, direction, page_size, max_pages, relay_id).await?
            }
        };

        self.print_walk(&result)
    }

    fn encode(&self, id: RecordId) -> Result<()> {
        let cursor = cursor::encode(id);
        match self.cli.format {
            OutputFormat::Json => self.print(&json!({ "id": id, "cursor": cursor })),
            OutputFormat::Pretty => {
                println!("{cursor}");
                Ok(())
            }
        }
    }

    fn decode(&self, token: &str) -> Result<()> {
        let id = cursor::decode(token)?;
        match self.cli.format {
            OutputFormat::Json => self.print(&json!({ "id": id, "cursor": token })),
            OutputFormat::Pretty => {
                println!("{id}");
                Ok(())
            }
        }
    }

    fn print_walk(&self, result: &WalkResult) -> Result<()> {
        for (n, page) in result.pages.iter().enumerate() {
            match self.cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(page)?),
                OutputFormat::Pretty => {
                    let info = &page.page_info;
                    println!(
                        "page {:>3}: {:?} (hasPreviousPage={}, hasNextPage={})",
                        n + 1,
                        page.ids(),
                        info.has_previous_page,
                        info.has_next_page
                    );
                }
            }
        }

        if result.truncated {
            eprintln!(
                "Stopped after {} pages; more pages were announced",
                result.pages.len()
            );
        }
        Ok(())
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

async fn walk_source<S: PageSource>(
    source: S,
    direction: Direction,
    page_size: u32,
    max_pages: usize,
    relay_id: Option<&str>,
) -> Result<WalkResult> {
    let mut walker = PageWalker::new(source, page_size).max_pages(max_pages);
    if let Some(relay_id) = relay_id {
        walker = walker.relay_id(relay_id);
    }
    walker.walk(direction).await
}
