// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::{Report, eyre};
use noble_ledger::{
    Catalog, Command, Ledger, PageOrder, SortPolicy, SyncError, TransitionResult,
    add_catalog_product, add_item, apply, archive_audit, audit_summary, delete_item, delete_page,
    filtered_rows, ledger_summary, load_all, load_audits, load_catalog, load_items, record_sale,
    remove_catalog_product, save_page, summarize_rows, update_item,
};
use noble_ledger_domain::{
    CatalogProductId, Item, ItemId, ItemPatch, NewCatalogProduct, NewItem, Page, PageId, Price,
    RowId, RowUpdate,
};
use noble_ledger_persistence::Persistence;
use std::io::Write;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};
use tracing::info;
use tracing_log::AsTrace;

/// Noble Ventures ledger - track stock pages, sales, and monthly audits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Keep rows sorted by product name
    #[arg(long, global = true)]
    sort_rows: bool,

    /// Keep pages sorted by title
    #[arg(long, global = true)]
    sort_pages: bool,

    /// Load pages newest date first
    #[arg(long, global = true)]
    newest_first: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: LedgerCommand,
}

impl Args {
    const fn sort_policy(&self) -> SortPolicy {
        SortPolicy {
            rows_by_name: self.sort_rows,
            pages_by_title: self.sort_pages,
        }
    }

    const fn page_order(&self) -> PageOrder {
        if self.newest_first {
            PageOrder::DateDescending
        } else {
            PageOrder::Stored
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
enum LedgerCommand {
    /// List pages with their row counts
    #[command(visible_alias = "ls")]
    Pages,

    /// Create a page dated today
    NewPage {
        /// Page title
        #[arg(long)]
        title: Option<String>,
    },

    /// Change a page's title or date label
    EditPage {
        /// Page id (defaults to the first page)
        #[arg(long)]
        page: Option<PageId>,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New date label, e.g. 23/06/2025
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a page and its rows
    DeletePage {
        /// Page id
        #[arg(long)]
        page: PageId,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Append a row to a page
    AddRow {
        /// Page id (defaults to the first page)
        #[arg(long)]
        page: Option<PageId>,
        /// Product name
        #[arg(long)]
        name: String,
        /// Original price; blank or non-numeric is stored blank
        #[arg(long)]
        original: Option<String>,
        /// Price sold for; blank or non-numeric is stored blank
        #[arg(long)]
        sold_for: Option<String>,
        /// Mark the row as sold
        #[arg(long)]
        sold: bool,
    },

    /// Change fields of a row, addressed by its position on the page
    EditRow {
        /// Page id (defaults to the first page)
        #[arg(long)]
        page: Option<PageId>,
        /// Row position as shown by `rows`, starting at 1
        #[arg(long)]
        row: usize,
        /// New product name
        #[arg(long)]
        name: Option<String>,
        /// New original price
        #[arg(long)]
        original: Option<String>,
        /// New sold price
        #[arg(long)]
        sold_for: Option<String>,
        /// New sold flag
        #[arg(long)]
        sold: Option<bool>,
    },

    /// Delete a row, addressed by its position on the page
    DeleteRow {
        /// Page id (defaults to the first page)
        #[arg(long)]
        page: Option<PageId>,
        /// Row position as shown by `rows`, starting at 1
        #[arg(long)]
        row: usize,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show a page's rows
    Rows {
        /// Page id (defaults to the first page)
        #[arg(long)]
        page: Option<PageId>,
        /// Only show rows whose product name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show sold/unsold counts and profit
    Summary {
        /// Page id; without it, every page is summarized
        #[arg(long)]
        page: Option<PageId>,
    },

    /// Manage the product catalog
    #[command(subcommand)]
    Catalog(CatalogAction),

    /// Generate and list monthly audits
    #[command(subcommand)]
    Audit(AuditAction),

    /// Manage the item list
    #[command(subcommand)]
    Items(ItemAction),
}

#[derive(Clone, Debug, Subcommand)]
enum CatalogAction {
    /// List products
    List,
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        quantity: u32,
    },
    /// Record a sale of one unit
    Sell {
        #[arg(long)]
        product: i64,
        #[arg(long)]
        price: f64,
    },
    /// Remove a product
    Remove {
        #[arg(long)]
        product: i64,
    },
}

#[derive(Clone, Debug, Subcommand)]
enum AuditAction {
    /// Archive this month's audit over the catalog
    Generate,
    /// List archived audits
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Debug, Subcommand)]
enum ItemAction {
    /// List items
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an item
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Option<String>,
    },
    /// Set an item's sold flag
    Sold {
        #[arg(long)]
        item: i64,
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        sold: bool,
    },
    /// Delete an item
    Delete {
        #[arg(long)]
        item: i64,
    },
}

/// Turns a sync failure into a report headed by its user notice.
fn notice<T>(result: Result<T, SyncError>) -> Result<T> {
    result.map_err(|err| {
        let message: String = err.user_notice();
        Report::new(err).wrap_err(message)
    })
}

/// Shared inputs for running one command.
struct Session<'a, W: Write> {
    store: &'a mut Persistence,
    out: &'a mut W,
    sort_policy: SortPolicy,
    page_order: PageOrder,
    now: OffsetDateTime,
}

impl<W: Write> Session<'_, W> {
    const fn today(&self) -> Date {
        self.now.date()
    }

    fn load_ledger(&mut self) -> Result<Ledger> {
        let today: Date = self.today();
        let empty: Ledger = Ledger::with_sort_policy(today, self.sort_policy);
        let loaded: TransitionResult =
            notice(load_all(self.store, &empty, self.page_order, today))?;
        Ok(loaded.new_state)
    }

    fn resolve_page(ledger: &Ledger, page: Option<PageId>) -> Result<PageId> {
        match page {
            Some(page_id) if ledger.page(page_id).is_some() => Ok(page_id),
            Some(page_id) => Err(eyre!("Page {page_id} not found")),
            None => Ok(ledger.active_page_id()),
        }
    }

    fn resolve_row(ledger: &Ledger, page_id: PageId, position: usize) -> Result<RowId> {
        ledger
            .page(page_id)
            .and_then(|page| position.checked_sub(1).and_then(|i| page.rows.get(i)))
            .map(|row| row.id)
            .ok_or_else(|| eyre!("No row {position} on page {page_id}"))
    }

    fn save(&mut self, ledger: &Ledger, page_id: PageId) -> Result<()> {
        let report = notice(save_page(self.store, ledger, page_id))?;
        writeln!(
            self.out,
            "Saved page {} ({} rows)",
            report.page_id, report.rows_saved
        )?;
        Ok(())
    }

    fn print_pages(&mut self, ledger: &Ledger) -> Result<()> {
        for (index, page) in ledger.pages().iter().enumerate() {
            let active: bool = page.id == ledger.active_page_id();
            writeln!(self.out, "{}", render::page_line(index + 1, page, active))?;
        }
        Ok(())
    }

    fn print_rows(&mut self, page: &Page, search: &str) -> Result<()> {
        writeln!(self.out, "{} {}", page.date, page.title)?;
        let matching: Vec<RowId> = filtered_rows(page, search).map(|row| row.id).collect();
        // Positions stay those of the full page so edit-row can address them.
        for (position, row) in page.rows.iter().enumerate() {
            if matching.contains(&row.id) {
                writeln!(self.out, "{}", render::row_line(position + 1, row))?;
            }
        }
        let summary = summarize_rows(filtered_rows(page, search));
        writeln!(self.out, "{}", render::summary_line(&summary))?;
        Ok(())
    }

    fn run(&mut self, command: LedgerCommand) -> Result<()> {
        match command {
            LedgerCommand::Pages => {
                let ledger: Ledger = self.load_ledger()?;
                self.print_pages(&ledger)
            }
            LedgerCommand::NewPage { title } => {
                let ledger: Ledger = self.load_ledger()?;
                let mut ledger: Ledger = step(
                    &ledger,
                    Command::AddPage {
                        today: self.today(),
                    },
                );
                let page_id: PageId = ledger.active_page_id();
                if let Some(title) = title {
                    ledger = step(&ledger, Command::SetPageTitle { page_id, title });
                }
                self.save(&ledger, page_id)
            }
            LedgerCommand::EditPage { page, title, date } => {
                let mut ledger: Ledger = self.load_ledger()?;
                let page_id: PageId = Self::resolve_page(&ledger, page)?;
                if let Some(title) = title {
                    ledger = step(&ledger, Command::SetPageTitle { page_id, title });
                }
                if let Some(date) = date {
                    ledger = step(&ledger, Command::SetPageDate { page_id, date });
                }
                self.save(&ledger, page_id)
            }
            LedgerCommand::DeletePage { page, yes } => {
                let ledger: Ledger = self.load_ledger()?;
                let today: Date = self.today();
                let result: TransitionResult =
                    notice(delete_page(self.store, &ledger, page, yes, today))?;
                if result.changed {
                    writeln!(self.out, "Deleted page {page}")?;
                } else {
                    writeln!(self.out, "Nothing deleted; pass --yes to confirm")?;
                }
                Ok(())
            }
            LedgerCommand::AddRow {
                page,
                name,
                original,
                sold_for,
                sold,
            } => {
                let ledger: Ledger = self.load_ledger()?;
                let page_id: PageId = Self::resolve_page(&ledger, page)?;
                let before: Vec<RowId> = ledger
                    .page(page_id)
                    .map(|p| p.rows.iter().map(|r| r.id).collect())
                    .unwrap_or_default();
                let ledger: Ledger = step(&ledger, Command::AddRow { page_id });
                let row_id: RowId = ledger
                    .page(page_id)
                    .and_then(|p| p.rows.iter().find(|r| !before.contains(&r.id)))
                    .map(|r| r.id)
                    .ok_or_else(|| eyre!("Row was not added to page {page_id}"))?;

                let updates: Vec<RowUpdate> = vec![
                    RowUpdate::ProductName(name),
                    RowUpdate::OriginalPrice(Price::parse(original.as_deref().unwrap_or(""))),
                    RowUpdate::PriceSold(Price::parse(sold_for.as_deref().unwrap_or(""))),
                    RowUpdate::Sold(sold),
                ];
                let ledger: Ledger = apply_row_updates(ledger, page_id, row_id, updates);
                self.save(&ledger, page_id)
            }
            LedgerCommand::EditRow {
                page,
                row,
                name,
                original,
                sold_for,
                sold,
            } => {
                let ledger: Ledger = self.load_ledger()?;
                let page_id: PageId = Self::resolve_page(&ledger, page)?;
                let row_id: RowId = Self::resolve_row(&ledger, page_id, row)?;

                let updates: Vec<RowUpdate> = [
                    name.map(RowUpdate::ProductName),
                    original.map(|p| RowUpdate::OriginalPrice(Price::parse(&p))),
                    sold_for.map(|p| RowUpdate::PriceSold(Price::parse(&p))),
                    sold.map(RowUpdate::Sold),
                ]
                .into_iter()
                .flatten()
                .collect();
                let ledger: Ledger = apply_row_updates(ledger, page_id, row_id, updates);
                self.save(&ledger, page_id)
            }
            LedgerCommand::DeleteRow { page, row, yes } => {
                let ledger: Ledger = self.load_ledger()?;
                let page_id: PageId = Self::resolve_page(&ledger, page)?;
                let row_id: RowId = Self::resolve_row(&ledger, page_id, row)?;
                let result: TransitionResult = apply(
                    &ledger,
                    Command::DeleteRow {
                        page_id,
                        row_id,
                        confirmed: yes,
                    },
                );
                result.trace();
                if !result.changed {
                    writeln!(self.out, "Nothing deleted; pass --yes to confirm")?;
                    return Ok(());
                }
                self.save(&result.new_state, page_id)
            }
            LedgerCommand::Rows { page, search } => {
                let ledger: Ledger = self.load_ledger()?;
                let page_id: PageId = Self::resolve_page(&ledger, page)?;
                let page: Page = ledger
                    .page(page_id)
                    .cloned()
                    .ok_or_else(|| eyre!("Page {page_id} not found"))?;
                self.print_rows(&page, search.as_deref().unwrap_or(""))
            }
            LedgerCommand::Summary { page } => {
                let ledger: Ledger = self.load_ledger()?;
                let summary = match page {
                    Some(page_id) => {
                        let page: &Page = ledger
                            .page(page_id)
                            .ok_or_else(|| eyre!("Page {page_id} not found"))?;
                        audit_summary(page)
                    }
                    None => ledger_summary(&ledger),
                };
                writeln!(self.out, "{}", render::summary_line(&summary))?;
                Ok(())
            }
            LedgerCommand::Catalog(action) => self.run_catalog(action),
            LedgerCommand::Audit(action) => self.run_audit(action),
            LedgerCommand::Items(action) => self.run_items(action),
        }
    }

    fn run_catalog(&mut self, action: CatalogAction) -> Result<()> {
        let catalog: Catalog = notice(load_catalog(self.store))?;
        let catalog: Catalog = match action {
            CatalogAction::List => catalog,
            CatalogAction::Add {
                name,
                price,
                quantity,
            } => {
                let product = NewCatalogProduct {
                    name,
                    price,
                    quantity_available: quantity,
                };
                notice(add_catalog_product(self.store, &catalog, &product))?
            }
            CatalogAction::Sell { product, price } => notice(record_sale(
                self.store,
                &catalog,
                CatalogProductId::new(product),
                price,
            ))?,
            CatalogAction::Remove { product } => notice(remove_catalog_product(
                self.store,
                &catalog,
                CatalogProductId::new(product),
            ))?,
        };

        for product in &catalog.products {
            writeln!(self.out, "{}", render::product_line(product))?;
        }
        Ok(())
    }

    fn run_audit(&mut self, action: AuditAction) -> Result<()> {
        match action {
            AuditAction::Generate => {
                let catalog: Catalog = notice(load_catalog(self.store))?;
                let record = notice(archive_audit(self.store, &catalog, self.now))?;
                for line in render::audit_lines(&record) {
                    writeln!(self.out, "{line}")?;
                }
            }
            AuditAction::List { json } => {
                let audits = notice(load_audits(self.store))?;
                if json {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&audits)?)?;
                } else {
                    for line in audits.iter().flat_map(render::audit_lines) {
                        writeln!(self.out, "{line}")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn run_items(&mut self, action: ItemAction) -> Result<()> {
        let items: Vec<Item> = notice(load_items(self.store))?;
        let items: Vec<Item> = match action {
            ItemAction::List { json } => {
                if json {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&items)?)?;
                    return Ok(());
                }
                items
            }
            ItemAction::Add { name, price } => {
                let created_at: String = self.now.format(&Rfc3339)?;
                let item = NewItem {
                    name,
                    sold: false,
                    price: Price::parse(price.as_deref().unwrap_or("")),
                    created_at,
                };
                notice(add_item(self.store, &items, &item))?
            }
            ItemAction::Sold { item, sold } => notice(update_item(
                self.store,
                &items,
                ItemId::new(item),
                &ItemPatch::sold(sold),
            ))?,
            ItemAction::Delete { item } => {
                notice(delete_item(self.store, &items, ItemId::new(item)))?
            }
        };

        for item in &items {
            writeln!(self.out, "{}", render::item_line(item))?;
        }
        Ok(())
    }
}

/// Applies a command and logs its audit event.
fn step(ledger: &Ledger, command: Command) -> Ledger {
    let result: TransitionResult = apply(ledger, command);
    result.trace();
    result.new_state
}

fn apply_row_updates(
    ledger: Ledger,
    page_id: PageId,
    row_id: RowId,
    updates: Vec<RowUpdate>,
) -> Ledger {
    updates.into_iter().fold(ledger, |ledger, update| {
        step(
            &ledger,
            Command::UpdateRow {
                page_id,
                row_id,
                update,
            },
        )
    })
}

fn open_store(database: Option<&PathBuf>) -> Result<Persistence> {
    let store: Persistence = if let Some(db_path) = database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(store)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let default_level: String = args.verbosity.log_level_filter().as_trace().to_string();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut store: Persistence = open_store(args.database.as_ref())?;
    let mut stdout = std::io::stdout().lock();
    let mut session = Session {
        store: &mut store,
        out: &mut stdout,
        sort_policy: args.sort_policy(),
        page_order: args.page_order(),
        now: OffsetDateTime::now_utc(),
    };

    session.run(args.command)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use noble_ledger::RemoteStore;
    use time::macros::datetime;

    fn try_run(store: &mut Persistence, argv: &[&str]) -> (Result<()>, String) {
        let mut full: Vec<&str> = vec!["noble-ledger"];
        full.extend_from_slice(argv);
        let args: Args = Args::try_parse_from(full).unwrap();

        let mut out: Vec<u8> = Vec::new();
        let mut session = Session {
            store,
            out: &mut out,
            sort_policy: args.sort_policy(),
            page_order: args.page_order(),
            now: datetime!(2025-06-23 12:00:00 UTC),
        };
        let result: Result<()> = session.run(args.command);
        (result, String::from_utf8(out).unwrap())
    }

    fn run(store: &mut Persistence, argv: &[&str]) -> String {
        let (result, output) = try_run(store, argv);
        result.unwrap();
        output
    }

    fn first_page_id(store: &mut Persistence) -> PageId {
        store.select_pages().unwrap()[0].id
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let args: Args =
            Args::try_parse_from(["noble-ledger", "rows", "--search", "vase", "--sort-rows"])
                .unwrap();

        assert!(args.sort_policy().rows_by_name);
        assert!(!args.sort_policy().pages_by_title);
        assert!(matches!(
            args.command,
            LedgerCommand::Rows { search: Some(_), .. }
        ));
    }

    #[test]
    fn test_rejects_malformed_page_id() {
        let result = Args::try_parse_from(["noble-ledger", "rows", "--page", "not-a-uuid"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_add_row_saves_a_new_page_on_empty_store() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();

        let output: String = run(
            &mut store,
            &["add-row", "--name", "Lamp", "--original", "10", "--sold-for", "15", "--sold"],
        );

        assert!(output.contains("(1 rows)"));
        let page_id: PageId = first_page_id(&mut store);
        assert_eq!(store.select_pages().unwrap()[0].date, "23/06/2025");
        assert_eq!(store.select_rows(page_id).unwrap().len(), 1);
    }

    #[test]
    fn test_rows_search_and_summary() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();
        run(&mut store, &["add-row", "--name", "Blue Vase", "--original", "10", "--sold-for", "15", "--sold"]);
        run(&mut store, &["add-row", "--name", "Lamp", "--original", "5"]);

        let output: String = run(&mut store, &["rows", "--search", "vase"]);

        assert!(output.contains("Blue Vase"));
        assert!(!output.contains("Lamp"));
        assert!(output.contains("Sold: 1  Not sold: 0  Profit: 5.00"));

        let summary: String = run(&mut store, &["summary"]);
        assert_eq!(summary.trim(), "Sold: 1  Not sold: 1  Profit: 5.00");
    }

    #[test]
    fn test_edit_row_by_position() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();
        run(&mut store, &["add-row", "--name", "Lamp", "--original", "5"]);

        run(&mut store, &["edit-row", "--row", "1", "--sold-for", "9", "--sold", "true"]);

        let page_id: PageId = first_page_id(&mut store);
        let rows = store.select_rows(page_id).unwrap();
        assert_eq!(rows[0].price_sold, Price::new(9.0));
        assert!(rows[0].sold);
        assert_eq!(rows[0].product_name, "Lamp");
    }

    #[test]
    fn test_delete_page_needs_confirmation() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();
        run(&mut store, &["new-page", "--title", "Fair"]);
        let page_id: String = first_page_id(&mut store).to_string();

        let declined: String = run(&mut store, &["delete-page", "--page", &page_id]);
        assert!(declined.contains("pass --yes"));
        assert_eq!(store.select_pages().unwrap().len(), 1);

        run(&mut store, &["delete-page", "--page", &page_id, "--yes"]);
        assert!(store.select_pages().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_page_reports_not_found() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();
        run(&mut store, &["add-row", "--name", "Lamp"]);
        let stranger: String = PageId::generate().to_string();

        let (result, output) = try_run(&mut store, &["delete-page", "--page", &stranger, "--yes"]);

        let err: Report = result.unwrap_err();
        assert_eq!(err.to_string(), "That page no longer exists.");
        assert!(!output.contains("pass --yes"));
        assert_eq!(store.select_pages().unwrap().len(), 1);
    }

    #[test]
    fn test_catalog_and_audit_flow() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();
        run(&mut store, &["catalog", "add", "--name", "Mug", "--price", "4", "--quantity", "2"]);
        let id: String = store.select_catalog_products().unwrap()[0].id.to_string();

        let listing: String = run(&mut store, &["catalog", "sell", "--product", &id, "--price", "6.5"]);
        assert!(listing.contains("Mug"));

        let audit: String = run(&mut store, &["audit", "generate"]);
        assert!(audit.starts_with("Jun 2025  total revenue 6.50"));
        assert_eq!(store.select_audits().unwrap().len(), 1);
    }

    #[test]
    fn test_items_add_and_mark_sold() {
        let mut store: Persistence = Persistence::new_in_memory().unwrap();
        let mut rx = store.subscribe_items();

        run(&mut store, &["items", "add", "--name", "Rug", "--price", "20"]);
        let id: String = store.select_items().unwrap()[0].id.to_string();
        run(&mut store, &["items", "sold", "--item", &id]);

        assert!(store.select_items().unwrap()[0].sold);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
    }
}
