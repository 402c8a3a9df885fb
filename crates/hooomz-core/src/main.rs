//! `hooomz-ops` - command-line front end for the operations service

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hooomz_calc::{calculate_framing, pack_cuts_with_kerf, Cut, FramingInput, StudSpacing};
use hooomz_catalog::{BuildTier, RoomKind};
use hooomz_core::{IntakeSession, OpsConfig, OpsService};
use hooomz_estimate::EstimateInput;
use hooomz_store::{JsonStore, OpsStore};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hooomz-ops", version, about = "Hooomz operations core")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run an intake: create the project, contact, and estimate
    Intake {
        /// Customer name
        #[arg(long)]
        name: String,
        /// Customer email
        #[arg(long)]
        email: Option<String>,
        /// Customer phone
        #[arg(long)]
        phone: Option<String>,
        /// Job site address
        #[arg(long)]
        address: String,
        /// Room selection as kind:tier (e.g. kitchen:better), repeatable
        #[arg(long = "room", required = true)]
        rooms: Vec<String>,
    },
    /// Price a set of rooms without creating a project
    Estimate {
        /// Room selection as kind:tier (e.g. full_bath:good), repeatable
        #[arg(long = "room", required = true)]
        rooms: Vec<String>,
    },
    /// Framing takeoff for one wall run
    Framing {
        /// Wall length in inches
        #[arg(long)]
        length: f64,
        /// Stud spacing on center: 16 or 24
        #[arg(long, default_value = "16")]
        spacing: u32,
        /// Rough opening width in inches, repeatable
        #[arg(long = "opening")]
        openings: Vec<f64>,
    },
    /// Pack cuts onto stock boards and save the plan
    Cutlist {
        /// Stock board length in inches
        #[arg(long, default_value = "96")]
        stock: f64,
        /// Saw kerf per cut in inches
        #[arg(long, default_value = "0.125")]
        kerf: f64,
        /// Cuts as label:length (e.g. header:39), repeatable
        #[arg(required = true)]
        cuts: Vec<String>,
    },
}

fn parse_room(spec: &str) -> Result<(RoomKind, BuildTier)> {
    let (kind, tier) = spec
        .split_once(':')
        .with_context(|| format!("room {spec:?} is not kind:tier"))?;
    let kind = match kind {
        "kitchen" => RoomKind::Kitchen,
        "full_bath" => RoomKind::FullBath,
        "half_bath" => RoomKind::HalfBath,
        "bedroom" => RoomKind::Bedroom,
        "living_room" => RoomKind::LivingRoom,
        "basement" => RoomKind::Basement,
        "laundry" => RoomKind::Laundry,
        "exterior" => RoomKind::Exterior,
        other => bail!("unknown room kind {other:?}"),
    };
    let tier = match tier {
        "good" => BuildTier::Good,
        "better" => BuildTier::Better,
        "best" => BuildTier::Best,
        other => bail!("unknown build tier {other:?}"),
    };
    Ok((kind, tier))
}

fn parse_cut(spec: &str) -> Result<Cut> {
    let (label, length) = spec
        .split_once(':')
        .with_context(|| format!("cut {spec:?} is not label:length"))?;
    let length_in: f64 = length
        .parse()
        .with_context(|| format!("cut length {length:?} is not a number"))?;
    Ok(Cut::new(label, length_in))
}

fn dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

// The CLI runs as the owner: permission checks stay in the code path but a
// local operator is never denied.
fn operator() -> hooomz_auth::User {
    hooomz_auth::User::new("operator", hooomz_auth::Role::Owner)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => OpsConfig::load(path).await?,
        None => OpsConfig::default(),
    };

    match cli.command {
        Commands::Intake {
            name,
            email,
            phone,
            address,
            rooms,
        } => {
            let store = JsonStore::open(&config.data_dir).await?;
            let service = OpsService::with_config(store, &config)?;

            let mut session = IntakeSession::new().with_customer(name).with_address(address);
            if let Some(email) = email {
                session = session.with_email(email);
            }
            if let Some(phone) = phone {
                session = session.with_phone(phone);
            }
            for spec in &rooms {
                let (kind, tier) = parse_room(spec)?;
                session = session.with_room(kind, tier);
            }

            let outcome = service.submit_intake(&operator(), session).await?;
            println!("project {} ({})", outcome.project.name, outcome.project.id);
            println!("contact {} ({})", outcome.contact.name, outcome.contact.id);
            println!(
                "estimate ${:.2} - ${:.2} (mid ${:.2})",
                dollars(outcome.estimate.range.low_cents),
                dollars(outcome.estimate.range.high_cents),
                dollars(outcome.estimate.range.mid_cents),
            );
        }
        Commands::Estimate { rooms } => {
            let store = hooomz_store::MemoryStore::new();
            let service = OpsService::with_config(store, &config)?;

            let mut input = EstimateInput::new();
            for spec in &rooms {
                let (kind, tier) = parse_room(spec)?;
                input = input.with_room(kind, tier);
            }

            let estimate = service.estimate_rooms(&operator(), &input)?;
            for line in &estimate.lines {
                println!(
                    "{:<12} {:?}: ${:.2} - ${:.2}",
                    line.name,
                    line.tier,
                    dollars(line.range.low_cents),
                    dollars(line.range.high_cents),
                );
            }
            println!(
                "total ${:.2} - ${:.2} (mid ${:.2})",
                dollars(estimate.range.low_cents),
                dollars(estimate.range.high_cents),
                dollars(estimate.range.mid_cents),
            );
        }
        Commands::Framing {
            length,
            spacing,
            openings,
        } => {
            let spacing = match spacing {
                16 => StudSpacing::Sixteen,
                24 => StudSpacing::TwentyFour,
                other => bail!("spacing must be 16 or 24, got {other}"),
            };
            let mut input = FramingInput::new(length).with_spacing(spacing);
            for width in openings {
                input = input.with_opening(width);
            }

            let result = calculate_framing(&input)?;
            println!("common studs: {}", result.stud_count);
            println!("king studs:   {}", result.king_studs);
            println!("jack studs:   {}", result.jack_studs);
            println!("total sticks: {}", result.total_studs());
            for header in &result.headers_in {
                println!("header:       {header}\"");
            }
            println!("plate stock:  {:.1} lf", result.plate_lf);
        }
        Commands::Cutlist { stock, kerf, cuts } => {
            let cuts = cuts
                .iter()
                .map(|spec| parse_cut(spec))
                .collect::<Result<Vec<_>>>()?;

            let plan = pack_cuts_with_kerf(&cuts, stock, kerf)?;
            for (i, board) in plan.boards.iter().enumerate() {
                let layout = board
                    .cuts
                    .iter()
                    .map(|c| format!("{} ({}\")", c.label, c.length_in))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("board {}: {layout} | waste {:.2}\"", i + 1, board.waste_in);
            }
            println!(
                "{} boards at {stock}\", total waste {:.2}\"",
                plan.stock_count(),
                plan.total_waste_in(),
            );

            let store = JsonStore::open(&config.data_dir).await?;
            store
                .write_collection(
                    hooomz_store::collections::FRAMING_CUT_LIST,
                    serde_json::to_value(&plan)?,
                )
                .await?;
            println!("saved plan to {}", config.data_dir.display());
        }
    }

    Ok(())
}
