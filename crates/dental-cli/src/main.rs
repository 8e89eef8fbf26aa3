//! `dental` command-line front end.
//!
//! Every subcommand opens the data directory, performs one operation through
//! `dental_core::DataStore`, prints the result and exits.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dental_core::models::DentalChart;
use dental_core::{DataStore, NewAppointment, NewPatient, NewTreatment, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "dental", version, about = "Dental practice records")]
struct Cli {
    /// Data directory holding patients.json, appointments.json, treatments.json
    #[arg(long, env = "DENTAL_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// TOML config file with a [store] table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Patient total and today's appointments
    Dashboard,
    /// Patient records
    #[command(subcommand)]
    Patients(PatientCommand),
    /// Appointment schedule
    #[command(subcommand)]
    Appointments(AppointmentCommand),
    /// Treatment history
    #[command(subcommand)]
    Treatments(TreatmentCommand),
    /// Dental chart, or detail for one tooth
    Chart {
        /// Universal tooth number, 1-32
        tooth: Option<u8>,
    },
}

#[derive(Debug, Subcommand)]
enum PatientCommand {
    List,
    Add(AddPatient),
    Show { id: String },
}

#[derive(Debug, Args)]
struct AddPatient {
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    /// Date of birth, YYYY-MM-DD
    #[arg(long, default_value = "")]
    dob: String,
}

#[derive(Debug, Subcommand)]
enum AppointmentCommand {
    List,
    Add(AddAppointment),
}

#[derive(Debug, Args)]
struct AddAppointment {
    /// Patient ID, e.g. P0001
    #[arg(long)]
    patient: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// HH:MM
    #[arg(long)]
    time: String,
    #[arg(long, default_value = "")]
    reason: String,
}

#[derive(Debug, Subcommand)]
enum TreatmentCommand {
    List,
    Add(AddTreatment),
}

#[derive(Debug, Args)]
struct AddTreatment {
    /// Patient ID, e.g. P0001
    #[arg(long)]
    patient: String,
    #[arg(long)]
    procedure: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    #[arg(long)]
    cost: String,
    #[arg(long, default_value = "")]
    notes: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");

    let store = DataStore::open(&config)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;

    run(&store, cli.command)
}

/// Flag (or `DENTAL_DATA_DIR`) wins over the config file, which wins over the default.
fn resolve_config(cli: &Cli) -> Result<StoreConfig> {
    if let Some(dir) = &cli.data_dir {
        return Ok(StoreConfig::with_data_dir(dir));
    }
    if let Some(path) = &cli.config {
        return StoreConfig::load(path)
            .with_context(|| format!("cannot read config {}", path.display()));
    }
    Ok(StoreConfig::default())
}

fn run(store: &DataStore, command: Command) -> Result<()> {
    match command {
        Command::Dashboard => {
            print!("{}", render::dashboard(&store.dashboard()));
        }
        Command::Patients(PatientCommand::List) => {
            for (id, patient) in store.list_patients() {
                println!("{}", render::patient_row(&id, &patient));
            }
        }
        Command::Patients(PatientCommand::Add(args)) => {
            let id = store
                .create_patient(NewPatient {
                    name: args.name,
                    phone: args.phone,
                    email: args.email,
                    dob: args.dob,
                })
                .context("patient not saved")?;
            println!("{id}");
        }
        Command::Patients(PatientCommand::Show { id }) => match store.get_patient(&id) {
            Some(patient) => print!("{}", render::patient_detail(&id, &patient)),
            None => bail!("no patient with ID {id}"),
        },
        Command::Appointments(AppointmentCommand::List) => {
            for (id, apt) in store.list_appointments_sorted() {
                println!("{}", render::appointment_row(&id, &apt));
            }
        }
        Command::Appointments(AppointmentCommand::Add(args)) => {
            let id = store
                .create_appointment(NewAppointment {
                    patient_id: args.patient,
                    date: args.date,
                    time: args.time,
                    reason: args.reason,
                })
                .context("appointment not scheduled")?;
            println!("{id}");
        }
        Command::Treatments(TreatmentCommand::List) => {
            for (id, treatment) in store.list_treatments_sorted() {
                println!("{}", render::treatment_row(&id, &treatment));
            }
        }
        Command::Treatments(TreatmentCommand::Add(args)) => {
            let id = store
                .create_treatment(NewTreatment {
                    patient_id: args.patient,
                    procedure: args.procedure,
                    date: args.date,
                    cost: args.cost,
                    notes: args.notes,
                })
                .context("treatment not recorded")?;
            println!("{id}");
        }
        Command::Chart { tooth: None } => {
            print!("{}", render::chart(&DentalChart::standard()));
        }
        Command::Chart { tooth: Some(number) } => match DentalChart::standard().tooth(number) {
            Some(tooth) => print!("{}", render::tooth(tooth)),
            None => bail!("tooth number must be between 1 and 32, got {number}"),
        },
    }
    Ok(())
}
