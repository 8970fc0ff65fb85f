use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use fhe_circuits::circuits::similarity::{encrypt_embedding, encrypt_quantized_embedding};
use fhe_circuits::circuits::{debt_cancel_circuit, dot_product, dot_product_uint, location_circuit};
use fhe_circuits::embedding::HashingEmbedder;
use fhe_circuits::keys::{key_gen, CollectiveDecryptT, Committee, PublicKeyT};
use fhe_circuits::tfhe::TfheContext;
use fhe_circuits::{logger, util};
use std::time::Instant;
use tracing::info;
use tracing::metadata::LevelFilter;

#[derive(Debug, Parser)]
#[command(about = "Evaluate oblivious circuits over encrypted inputs")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Backend::Ideal)]
    backend: Backend,
    /// Size of the decryption committee (ideal backend only)
    #[arg(long, default_value_t = 1)]
    parties: usize,
    /// Parties required to decrypt (ideal backend only)
    #[arg(long, default_value_t = 1)]
    threshold: usize,
    /// Parties taking part in decryption rounds, defaults to all (ideal backend only)
    #[arg(long)]
    participants: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// Exact value ciphertexts
    Ideal,
    /// tfhe-rs integer ciphertexts (slow)
    Tfhe,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Cancel debt of A to B through common acquaintances
    Debt {
        #[arg(long, value_delimiter = ',', required = true)]
        a_ids: Vec<u32>,
        #[arg(long, value_delimiter = ',', required = true)]
        a_owed: Vec<u32>,
        #[arg(long, value_delimiter = ',', required = true)]
        b_ids: Vec<u32>,
        #[arg(long, value_delimiter = ',', required = true)]
        b_owes: Vec<u32>,
        #[arg(long)]
        a_owes_b: u32,
    },
    /// Check whether a location is among the guesses
    Location {
        /// Location bytes, e.g. 3,7,9
        #[arg(long, value_delimiter = ',', required = true)]
        location: Vec<u8>,
        /// Guess bytes, repeat for several guesses
        #[arg(long = "guess", required = true)]
        guesses: Vec<String>,
    },
    /// Encrypted cosine similarity of two texts
    Similarity {
        text_a: String,
        text_b: String,
        #[arg(long, default_value_t = 64)]
        dim: usize,
        /// Quantization scale used by integer only backends
        #[arg(long, default_value_t = 256.0)]
        scale: f32,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init(LevelFilter::INFO);
    let cli = Cli::parse();

    match cli.backend {
        Backend::Ideal => {
            let committee = Committee::new(cli.parties, cli.threshold)?;
            let committee = committee.with_participants(cli.participants.unwrap_or(cli.parties));
            info!(
                parties = committee.parties(),
                threshold = committee.threshold(),
                "decryption committee"
            );
            run_ideal(&committee, cli.command)
        }
        Backend::Tfhe => {
            check_tfhe_committee(&cli)?;
            let start = Instant::now();
            let (committee, context) = TfheContext::generate_keys();
            info!("tfhe keys generated in {:?}", start.elapsed());
            run(&context, &committee, cli.command)
        }
    }
}

/// `tfhe-rs` decrypts with a single client key, so only the trivial committee is supported
fn check_tfhe_committee(cli: &Cli) -> anyhow::Result<()> {
    if cli.parties != 1 || cli.threshold != 1 || cli.participants.is_some() {
        bail!("--parties, --threshold and --participants only apply to the ideal backend");
    }
    Ok(())
}

fn run_ideal(committee: &Committee, command: Command) -> anyhow::Result<()> {
    let pk = key_gen();

    match command {
        Command::Similarity {
            text_a,
            text_b,
            dim,
            ..
        } => {
            let embedder = HashingEmbedder::new(dim)?;
            let a = encrypt_embedding(&pk, &embedder, &text_a)?;
            let b = encrypt_embedding(&pk, &embedder, &text_b)?;

            let start = Instant::now();
            let score = dot_product(&a, &b);
            info!("similarity computed in {:?}", start.elapsed());

            let score = committee.decrypt_tensor(&score).context("decrypt similarity")?[0];
            println!("similarity: {score:.4}");
            Ok(())
        }
        command => run(&pk, committee, command),
    }
}

fn run<PK, D>(pk: &PK, committee: &D, command: Command) -> anyhow::Result<()>
where
    PK: PublicKeyT,
    D: CollectiveDecryptT<Bool = PK::Bool, U8 = PK::U8, U32 = PK::U32>,
{
    match command {
        Command::Debt {
            a_ids,
            a_owed,
            b_ids,
            b_owes,
            a_owes_b,
        } => {
            let a_ids = pk.encrypt_u32_slice(&a_ids);
            let a_owed = pk.encrypt_u32_slice(&a_owed);
            let b_ids = pk.encrypt_u32_slice(&b_ids);
            let b_owes = pk.encrypt_u32_slice(&b_owes);
            info!("inputs encrypted");

            let start = Instant::now();
            let res = debt_cancel_circuit(&a_ids, &a_owed, &b_ids, &b_owes, a_owes_b)?;
            info!("debt cancellation computed in {:?}", start.elapsed());

            let ids = committee.decrypt_u32_slice(&res.ids).context("decrypt ids")?;
            let amounts = committee
                .decrypt_u32_slice(&res.amounts)
                .context("decrypt amounts")?;
            let amount_left = committee
                .decrypt_u32(&res.amount_left)
                .context("decrypt amount left")?;

            println!("ids: {ids:?}");
            println!("amounts: {amounts:?}");
            println!("amount left: {amount_left}");
        }
        Command::Location { location, guesses } => {
            let location = pk.encrypt_u8_slice(&location);
            let guesses = guesses
                .iter()
                .map(|guess| Ok(pk.encrypt_u8_slice(&parse_bytes(guess)?)))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let start = Instant::now();
            let found = location_circuit(&location, &guesses)?;
            info!("location check computed in {:?}", start.elapsed());

            let found = committee.decrypt_bool(&found).context("decrypt result")?;
            println!("found: {found}");
        }
        Command::Similarity {
            text_a,
            text_b,
            dim,
            scale,
        } => {
            let embedder = HashingEmbedder::new(dim)?;
            let a = encrypt_quantized_embedding(pk, &embedder, &text_a, scale)?;
            let b = encrypt_quantized_embedding(pk, &embedder, &text_b, scale)?;

            let start = Instant::now();
            let score: PK::U32 = dot_product_uint(&a, &b)?;
            info!("similarity computed in {:?}", start.elapsed());

            let score = committee.decrypt_u32(&score).context("decrypt similarity")?;
            println!("similarity: {:.4}", util::dequantize(score, scale * scale));
        }
    }

    Ok(())
}

fn parse_bytes(s: &str) -> anyhow::Result<Vec<u8>> {
    s.split(',')
        .map(|byte| {
            byte.trim()
                .parse::<u8>()
                .with_context(|| format!("invalid byte {byte:?} in guess {s:?}"))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tfhe_rejects_committee_flags() {
        let cli = Cli::parse_from([
            "fhe-circuits",
            "--backend",
            "tfhe",
            "location",
            "--location",
            "1",
            "--guess",
            "1",
        ]);
        assert!(check_tfhe_committee(&cli).is_ok());

        let cli = Cli::parse_from([
            "fhe-circuits",
            "--backend",
            "tfhe",
            "--parties",
            "3",
            "location",
            "--location",
            "1",
            "--guess",
            "1",
        ]);
        assert!(check_tfhe_committee(&cli).is_err());
    }

    #[test]
    fn test_parse_bytes() {
        assert_eq!(parse_bytes("1, 2,3").unwrap(), vec![1, 2, 3]);
        assert!(parse_bytes("1,256").is_err());
    }
}
