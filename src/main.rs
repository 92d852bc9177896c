use clap::{Parser, Subcommand};
use memberships::application::renewal::RenewalService;
use memberships::application::status::MembershipStatusChecker;
use memberships::domain::member::MemberId;
use memberships::domain::ports::{MemberStore, MemberStoreBox};
use memberships::infrastructure::in_memory::{
    InMemoryMemberStore, LogNotifier, ThresholdPaymentVerifier,
};
#[cfg(feature = "storage-rocksdb")]
use memberships::infrastructure::rocksdb::RocksDBMemberStore;
use memberships::interfaces::csv::member_reader::MemberReader;
use memberships::interfaces::csv::member_writer::MemberWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Members CSV used to seed the store before running the command
    #[arg(long)]
    members: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Smallest payment accepted as verified
    #[arg(long, default_value = "0")]
    min_payment: Decimal,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print whether a member is flagged active
    Status { id: u64 },
    /// Renew a member's subscription for a number of days
    Renew {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Deactivate every member whose subscription has ended
    Sweep,
    /// Print the member table
    List,
}

#[derive(Clone)]
enum Backend {
    InMemory(InMemoryMemberStore),
    #[cfg(feature = "storage-rocksdb")]
    RocksDB(RocksDBMemberStore),
}

impl Backend {
    #[cfg(feature = "storage-rocksdb")]
    fn open(db_path: Option<&Path>) -> Result<Self> {
        match db_path {
            Some(path) => Ok(Self::RocksDB(
                RocksDBMemberStore::open(path).into_diagnostic()?,
            )),
            None => Ok(Self::InMemory(InMemoryMemberStore::new())),
        }
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    fn open(db_path: Option<&Path>) -> Result<Self> {
        if db_path.is_some() {
            eprintln!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
        }
        Ok(Self::InMemory(InMemoryMemberStore::new()))
    }

    fn boxed(&self) -> MemberStoreBox {
        match self.clone() {
            Self::InMemory(store) => Box::new(store),
            #[cfg(feature = "storage-rocksdb")]
            Self::RocksDB(store) => Box::new(store),
        }
    }
}

async fn seed(store: &dyn MemberStore, path: &Path) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    for member in MemberReader::new(file).members() {
        match member {
            Ok(member) => store.insert(member).await.into_diagnostic()?,
            Err(e) => warn!(path = %path.display(), "Error reading member: {}", e),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    let backend = Backend::open(cli.db_path.as_deref())?;
    let store = backend.boxed();
    if let Some(path) = &cli.members {
        seed(store.as_ref(), path).await?;
    }

    match cli.command {
        Command::Status { id } => {
            let checker = MembershipStatusChecker::new(backend.boxed());
            let active = checker.is_active(MemberId(id)).await.into_diagnostic()?;
            println!("{}", active);
            return Ok(());
        }
        Command::Renew { id, amount, days } => {
            let service = renewal_service(&backend, cli.min_payment);
            let renewed = service
                .renew_subscription(MemberId(id), amount.into(), days)
                .await
                .into_diagnostic()?;
            if renewed {
                eprintln!("Member {} renewed for {} days", id, days);
            } else {
                eprintln!("Renewal declined for member {}", id);
            }
        }
        Command::Sweep => {
            let service = renewal_service(&backend, cli.min_payment);
            let report = service.deactivate_expired_members().await.into_diagnostic()?;
            eprintln!(
                "Deactivated {} of {} members",
                report.deactivated.len(),
                report.scanned
            );
        }
        Command::List => {}
    }

    // Output final state
    let members = store.all_members().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = MemberWriter::new(stdout.lock());
    writer.write_members(members).into_diagnostic()?;

    Ok(())
}

fn renewal_service(backend: &Backend, min_payment: Decimal) -> RenewalService {
    RenewalService::new(
        backend.boxed(),
        Box::new(ThresholdPaymentVerifier::new(min_payment)),
        Box::new(LogNotifier),
    )
}
