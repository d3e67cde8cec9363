//! `ct` — filters over contact-trace text streams.
//!
//! Every subcommand reads one comma-separated stream (stdin, or `--input`)
//! and writes one (stdout, or `--output`), so steps chain with pipes.  Logs
//! go to stderr; `RUST_LOG` overrides the default `warn,ct=info`.
//!
//! # Example
//!
//! ```bash
//! ct encounters < sessions.csv > encounters.csv
//! ct lcc < encounters.csv > lcc.csv
//! ct shuffle-contacts dcwb --seed 7 < lcc.csv > dcwb.csv
//! ct prevalence --start 1300000000 --source 00:11:22:33:44:55 < dcwb.csv
//! ```

mod stream;


use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rustc_hash::FxHashSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ct_core::{Node, ShuffleRng, Timestamp};
use ct_diffusion::{DiffusionConfig, PrevalenceCurve, simulate, simulate_sources};
use ct_encounter::{
    ExtractOptions, Extraction, active_sessions, extract_encounters, filter_by_nodes, filter_by_start, tally,
    unique_tally,
};
use ct_graph::{ClusterMetric, filter_to_component, largest_component, repeat_counts};
use ct_io::{
    read_contacts, read_edges, read_encounters, read_sessions, write_contacts, write_edges, write_encounters, write_pairs,
    write_prevalence, write_rows, write_sessions,
};
use ct_shuffle::{ContactShuffle, SessionShuffle, pick_contact};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Contact-trace analysis filters.
#[derive(Parser, Debug)]
#[command(name = "ct")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read records from this file instead of stdin
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Write records to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sessions in, encounters between co-located nodes out
    Encounters {
        /// Drop encounters that end by this time and clip earlier starts to it
        #[arg(long)]
        start_time: Option<i64>,
    },

    /// Encounters in, one contact per encounter at its start time out
    Contacts,

    /// Edges in, only the edges inside the largest connected component out
    Lcc,

    /// Contacts in, contacts from a null model out
    ShuffleContacts {
        /// original, dcwb, dcb, dcw, or d (`_`)
        algorithm: ContactShuffle,

        /// Random seed.  When omitted, a random seed is drawn and logged.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sessions in, sessions from a null model out
    ShuffleSessions {
        /// original, tn, ln, tl, tlln, lntn, or destroy_all (`_`)
        algorithm: SessionShuffle,

        /// Random seed.  When omitted, a random seed is drawn and logged.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Contacts in, prevalence under ideal diffusion out
    ///
    /// With one source the rows are `relative_time,fraction`; with several
    /// they are `source,relative_time,fraction`.
    Prevalence {
        /// Time reported as 0
        #[arg(long, required_unless_present = "pick")]
        start: Option<i64>,

        /// Initially infected node; repeat for one curve per source
        #[arg(long = "source", required_unless_present = "pick")]
        sources: Vec<String>,

        /// Start from a random contact: its first node at its time
        #[arg(long, conflicts_with_all = ["start", "sources"])]
        pick: bool,

        /// Seed for `--pick`
        #[arg(long, requires = "pick")]
        seed: Option<u64>,
    },

    /// Contacts in, `elapsed,cumulative_count` rows out
    Tally {
        /// Time reported as 0 (default: first contact)
        #[arg(long)]
        start: Option<i64>,

        /// Count distinct node pairs instead of contacts
        #[arg(long)]
        unique: bool,
    },

    /// Edges in, one graph metric out (default: average clustering)
    Cluster {
        /// Average clustering coefficient
        #[arg(short = 'c', long, conflicts_with_all = ["density", "triangles", "average_square_clustering"])]
        average_clustering: bool,

        /// Graph density
        #[arg(short = 'd', long, conflicts_with_all = ["triangles", "average_square_clustering"])]
        density: bool,

        /// Mean triangle count per node
        #[arg(short = 't', long, conflicts_with = "average_square_clustering")]
        triangles: bool,

        /// Average square clustering coefficient
        #[arg(short = 's', long)]
        average_square_clustering: bool,

        /// Exclude nodes with zero clustering from the average
        #[arg(short = 'z', long)]
        no_zero: bool,
    },

    /// Edges in, `node_a,node_b,count` per unordered pair out
    Repeats,

    /// Sessions in, sessions restricted by time and node out
    FilterSessions {
        /// Keep sessions still open at this time, clipping their start
        #[arg(long)]
        start: Option<i64>,

        /// Keep only this node's sessions; repeatable
        #[arg(long = "node")]
        nodes: Vec<String>,
    },

    /// Sessions in, `time,active_count` rows out
    ActiveSessions,

    /// Contacts in, one uniformly chosen contact out
    Pick {
        /// Random seed.  When omitted, a random seed is drawn and logged.
        #[arg(long)]
        seed: Option<u64>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,ct=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = stream::open_input(cli.input.as_deref())?;
    let output = stream::open_output(cli.output.as_deref())?;
    run(cli.command, input, output)
}

fn run(command: Command, input: impl Read, output: impl Write) -> Result<()> {
    match command {
        Command::Encounters { start_time } => {
            let sessions = read_sessions(input).context("reading sessions")?;
            let opts = ExtractOptions { start_time: start_time.map(Timestamp) };
            let Extraction { encounters, self_overlaps } = extract_encounters(sessions, &opts);
            if self_overlaps > 0 {
                warn!(self_overlaps, "dropped overlapping sessions of the same node");
            }
            info!(encounters = encounters.len(), "extracted encounters");
            write_encounters(output, &encounters)?;
        }

        Command::Contacts => {
            let encounters = read_encounters(input).context("reading encounters")?;
            let contacts: Vec<_> = encounters.iter().map(|e| e.to_contact()).collect();
            write_contacts(output, &contacts)?;
        }

        Command::Lcc => {
            let edges = read_edges(input).context("reading edges")?;
            let component = largest_component(&edges)?;
            let kept = filter_to_component(edges, &component);
            info!(nodes = component.len(), edges = kept.len(), "largest connected component");
            write_edges(output, &kept)?;
        }

        Command::ShuffleContacts { algorithm, seed } => {
            let mut rng = ShuffleRng::new(resolve_seed(seed));
            let contacts = read_contacts(input).context("reading contacts")?;
            let shuffled = algorithm.apply(contacts, &mut rng)?;
            write_contacts(output, &shuffled)?;
        }

        Command::ShuffleSessions { algorithm, seed } => {
            let mut rng = ShuffleRng::new(resolve_seed(seed));
            let sessions = read_sessions(input).context("reading sessions")?;
            let shuffled = algorithm.apply(sessions, &mut rng)?;
            write_sessions(output, &shuffled)?;
        }

        Command::Prevalence { start, sources, pick, seed } => {
            let contacts = read_contacts(input).context("reading contacts")?;
            if pick {
                let mut rng = ShuffleRng::new(resolve_seed(seed));
                let Some(first) = pick_contact(&contacts, &mut rng) else {
                    bail!("no contacts to pick a diffusion source from");
                };
                info!(source = %first.node_a, start = %first.time, "picked diffusion source");
                let config = DiffusionConfig { source: first.node_a, start_offset: first.time };
                let curve = simulate(contacts, &config)?;
                report(&curve);
                write_prevalence(output, curve.fractions())?;
                return Ok(());
            }

            let start_offset = Timestamp(start.unwrap_or_default());
            let sources: Vec<Node> = sources.iter().map(Node::new).collect();
            if let [source] = sources.as_slice() {
                let config = DiffusionConfig { source: source.clone(), start_offset };
                let curve = simulate(contacts, &config)?;
                report(&curve);
                write_prevalence(output, curve.fractions())?;
            } else {
                let curves = simulate_sources(contacts, &sources, start_offset)?;
                curves.iter().for_each(report);
                let rows = sources
                    .iter()
                    .zip(&curves)
                    .flat_map(|(source, curve)| curve.fractions().map(move |(t, f)| (source, t, f)));
                write_rows(output, rows)?;
            }
        }

        Command::Tally { start, unique } => {
            let contacts = read_contacts(input).context("reading contacts")?;
            let start = start.map(Timestamp);
            let rows = if unique { unique_tally(contacts, start)? } else { tally(contacts, start)? };
            write_pairs(output, rows)?;
        }

        Command::Cluster { average_clustering: _, density, triangles, average_square_clustering, no_zero } => {
            let metric = if density {
                ClusterMetric::Density
            } else if triangles {
                ClusterMetric::Triangles
            } else if average_square_clustering {
                ClusterMetric::AverageSquareClustering
            } else {
                ClusterMetric::AverageClustering { count_zeros: !no_zero }
            };
            let edges = read_edges(input).context("reading edges")?;
            let value = metric.compute(&edges)?;
            info!(%metric, value, "graph metric");
            write_rows(output, [(value,)])?;
        }

        Command::Repeats => {
            let edges = read_edges(input).context("reading edges")?;
            let counts = repeat_counts(&edges);
            write_rows(output, counts.iter().map(|(key, n)| (key.low(), key.high(), n)))?;
        }

        Command::FilterSessions { start, nodes } => {
            let mut sessions = read_sessions(input).context("reading sessions")?;
            if let Some(start) = start {
                sessions = filter_by_start(sessions, Timestamp(start));
            }
            if !nodes.is_empty() {
                let keep: FxHashSet<Node> = nodes.iter().map(Node::new).collect();
                sessions = filter_by_nodes(sessions, &keep);
            }
            write_sessions(output, &sessions)?;
        }

        Command::ActiveSessions => {
            let sessions = read_sessions(input).context("reading sessions")?;
            write_pairs(output, active_sessions(&sessions))?;
        }

        Command::Pick { seed } => {
            let mut rng = ShuffleRng::new(resolve_seed(seed));
            let contacts = read_contacts(input).context("reading contacts")?;
            let Some(picked) = pick_contact(&contacts, &mut rng) else {
                bail!("no contacts to pick from");
            };
            write_contacts(output, &[picked])?;
        }
    }
    Ok(())
}

fn report(curve: &PrevalenceCurve) {
    info!(infected = curve.final_infected(), nodes = curve.total_nodes, "diffusion finished");
}

/// The given seed, or a fresh one that is logged so the run can be repeated.
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed: u64 = rand::random();
        warn!(seed, "no --seed given; pass this seed to reproduce the run");
        seed
    })
}
