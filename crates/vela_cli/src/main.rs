use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use vela_dasha::{
    ALL_SYSTEMS, Body, DEFAULT_DEPTH, DashaError, Level, Period, PeriodSource, PeriodSystem,
    ResolvedPath, active_chain, compute_children, definition, jd, resolve_path,
    resolve_path_with_children,
};

#[derive(Parser)]
#[command(name = "vela", about = "Dasha period subdivision CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported period systems
    Systems,
    /// Compute the child periods of one period
    Children {
        /// Period system name
        #[arg(long)]
        system: String,
        /// Ruling body of the parent period
        #[arg(long)]
        body: String,
        /// Start of the parent period (JD UTC)
        #[arg(long)]
        start_jd: String,
        /// Duration of the parent period in years
        #[arg(long)]
        years: String,
        /// Nesting level of the parent (0-4)
        #[arg(long, default_value = "0")]
        level: u8,
    },
    /// Resolve a selection path against a supplied period tree
    Resolve {
        /// Period system name
        #[arg(long)]
        system: String,
        /// JSON file with the externally supplied tree
        #[arg(long)]
        tree: PathBuf,
        /// Comma-separated body names, one per level
        #[arg(long)]
        path: String,
        /// Also list the terminal period's children
        #[arg(long)]
        children: bool,
    },
    /// Show the chain of periods active at an instant
    Active {
        /// Period system name
        #[arg(long)]
        system: String,
        /// JSON file with the externally supplied tree
        #[arg(long)]
        tree: PathBuf,
        /// Query instant (JD UTC)
        #[arg(long)]
        jd: String,
        /// Number of levels to resolve
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Systems => cmd_systems(),
        Commands::Children {
            system,
            body,
            start_jd,
            years,
            level,
        } => cmd_children(&system, &body, &start_jd, &years, level),
        Commands::Resolve {
            system,
            tree,
            path,
            children,
        } => cmd_resolve(&system, &tree, &path, children),
        Commands::Active {
            system,
            tree,
            jd,
            depth,
        } => cmd_active(&system, &tree, &jd, depth),
    }
}

fn cmd_systems() {
    for sys in ALL_SYSTEMS {
        let def = definition(sys);
        let order: Vec<&str> = def.order.iter().map(|b| b.name()).collect();
        println!(
            "{:<18} {:>4}y  {}",
            sys.name(),
            def.total_years,
            order.join(", ")
        );
    }
}

fn cmd_children(system: &str, body: &str, start_jd: &str, years: &str, level: u8) {
    let system = parse_system(system);
    let body = parse_body(body);
    let start_jd = parse_decimal(start_jd, "start JD");
    let years = parse_decimal(years, "duration");
    let level = Level::from_u8(level).unwrap_or_else(|| {
        eprintln!("Invalid level: {level} (0-4)");
        std::process::exit(1);
    });

    let parent = Period::new(body, start_jd, years, level);
    let children = exit_on_err(compute_children(&parent, system));

    println!(
        "{} {} of {}, {} .. {}:",
        parent.body.name(),
        parent.level.name(),
        system.name(),
        format_date(parent.start_jd),
        format_date(parent.end_jd)
    );
    for child in &children {
        print_period(&child.body.name().to_string(), child, None);
    }
}

fn cmd_resolve(system: &str, tree: &Path, path: &str, children: bool) {
    let system = parse_system(system);
    let tree = load_tree(tree);
    let path = parse_selection(path);

    if children {
        let (resolved, kids) = exit_on_err(resolve_path_with_children(&tree, &path, system));
        print_resolution(&resolved);
        println!("children ({}):", source_tag(kids.source));
        for child in &kids.periods {
            print_period(&child.body.name().to_string(), child, None);
        }
    } else {
        let resolved = exit_on_err(resolve_path(&tree, &path, system));
        print_resolution(&resolved);
    }
}

fn cmd_active(system: &str, tree: &Path, query_jd: &str, depth: usize) {
    let system = parse_system(system);
    let tree = load_tree(tree);
    let query_jd = parse_decimal(query_jd, "query JD");

    let chain = exit_on_err(active_chain(&tree, query_jd, depth, system));
    if chain.levels.is_empty() {
        println!(
            "no active period at JD {query_jd} ({})",
            format_date(query_jd)
        );
        return;
    }
    print_resolution(&chain);
}

// ── parsing helpers ──────────────────────────────────────────────────

fn parse_system(s: &str) -> PeriodSystem {
    PeriodSystem::parse(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        let names: Vec<&str> = ALL_SYSTEMS.iter().map(|sys| sys.name()).collect();
        eprintln!("Valid: {}", names.join(", "));
        std::process::exit(1);
    })
}

fn parse_body(s: &str) -> Body {
    Body::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid body name: {s}");
        eprintln!(
            "Valid: Surya/Sun, Chandra/Moon, Mangal/Mars, Buddh/Mercury, \
             Guru/Jupiter, Shukra/Venus, Shani/Saturn, Rahu, Ketu"
        );
        std::process::exit(1);
    })
}

fn parse_selection(s: &str) -> Vec<Body> {
    s.split(',').map(|part| parse_body(part.trim())).collect()
}

fn parse_decimal(s: &str, what: &str) -> Decimal {
    Decimal::from_str(s).unwrap_or_else(|e| {
        eprintln!("Invalid {what}: {s} ({e})");
        std::process::exit(1);
    })
}

fn load_tree(path: &Path) -> Vec<Period> {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn exit_on_err<T>(result: Result<T, DashaError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

// ── output helpers ───────────────────────────────────────────────────

fn print_resolution(resolved: &ResolvedPath) {
    for level in &resolved.levels {
        print_period(
            &format!("{} {}", level.period.level.name(), level.period.body.name()),
            &level.period,
            Some(level.source),
        );
    }
}

fn print_period(label: &str, period: &Period, source: Option<PeriodSource>) {
    let tag = match source {
        Some(s) => format!(" [{}]", source_tag(s)),
        None => String::new(),
    };
    println!(
        "  {:<28} {} .. {}  ({} y){}",
        label,
        format_date(period.start_jd),
        format_date(period.end_jd),
        period.duration_years.round_dp(6),
        tag
    );
}

fn source_tag(source: PeriodSource) -> &'static str {
    match source {
        PeriodSource::External => "external",
        PeriodSource::Computed => "computed",
    }
}

fn format_date(jd_val: Decimal) -> String {
    match jd::jd_to_calendar(jd_val) {
        Some((y, m, d)) => format!("{y:04}-{m:02}-{d:02}"),
        None => format!("JD {jd_val}"),
    }
}
