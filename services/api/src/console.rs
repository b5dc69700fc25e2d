use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use underwriting::config::AppConfig;
use underwriting::error::AppError;
use underwriting::workflows::underwriting::{
    load_transcript, replay, Field, UnderwritingConfig, UnderwritingSession,
};

const GREETING: &str = "👋 Hi! I'll help you underwrite a mortgage. Type 'summary' at any time, 'reset' to start over, or press enter on an empty line to quit.";

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// CSV transcript with `field,value` columns; `summary` and `reset` rows are allowed
    #[arg(long)]
    pub(crate) transcript: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Property sales price, e.g. 300000 or $300,000
    #[arg(long)]
    pub(crate) sales_price: String,
    /// Down payment amount
    #[arg(long)]
    pub(crate) down_payment: String,
    /// Annual interest rate in percent, e.g. 6.5 or 6.5%
    #[arg(long)]
    pub(crate) interest_rate: String,
    /// Loan term in years (defaults to 30)
    #[arg(long)]
    pub(crate) loan_term: Option<String>,
}

/// Underwriting settings (bank rate) resolved from the environment.
fn underwriting_config() -> Result<UnderwritingConfig, AppError> {
    Ok(AppConfig::load()?.underwriting)
}

pub(crate) fn run_chat() -> Result<(), AppError> {
    let config = underwriting_config()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    chat(config, stdin.lock(), stdout.lock())
}

pub(crate) fn run_replay(args: ReplayArgs) -> Result<(), AppError> {
    let config = underwriting_config()?;
    let steps = load_transcript(&args.transcript)?;
    let mut session = UnderwritingSession::open(config);

    println!(
        "Replaying {} turns from {}",
        steps.len(),
        args.transcript.display()
    );
    for message in replay(&mut session, &steps) {
        println!("{message}");
    }
    Ok(())
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = underwriting_config()?;
    let stdout = io::stdout();
    quote(config, &args, stdout.lock())
}

/// Line-oriented dialogue: each answer fills the first unset field in collection order.
pub(crate) fn chat<R, W>(config: UnderwritingConfig, input: R, mut output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = UnderwritingSession::open(config);
    writeln!(output, "{GREETING}")?;
    if let Some(prompt) = session.next_prompt() {
        writeln!(output, "{prompt}")?;
    }

    for line in input.lines() {
        let line = line?;
        let answer = line.trim();
        if answer.is_empty() {
            break;
        }

        match answer.to_ascii_lowercase().as_str() {
            "reset" => {
                writeln!(output, "{}", session.reset().message)?;
                continue;
            }
            "summary" => {
                writeln!(output, "{}", session.summary().text())?;
                continue;
            }
            "hi" | "hello" => {
                match session.next_prompt() {
                    Some(prompt) => writeln!(output, "{prompt}")?,
                    None => writeln!(output, "{}", session.summary().text())?,
                }
                continue;
            }
            _ => {}
        }

        let Some(field) = session.store().next_unset() else {
            writeln!(output, "{}", session.summary().text())?;
            continue;
        };

        let outcome = session.submit(field, Some(answer));
        writeln!(output, "{}", outcome.message())?;
        if !outcome.is_accepted() {
            continue;
        }

        match session.next_prompt() {
            Some(prompt) => writeln!(output, "{prompt}")?,
            None => writeln!(output, "{}", session.summary().text())?,
        }
    }

    output.flush()?;
    Ok(())
}

pub(crate) fn quote<W: Write>(
    config: UnderwritingConfig,
    args: &QuoteArgs,
    mut output: W,
) -> Result<(), AppError> {
    let mut session = UnderwritingSession::open(config);
    let mut answers = vec![
        (Field::SalesPrice, args.sales_price.as_str()),
        (Field::DownPayment, args.down_payment.as_str()),
        (Field::InterestRate, args.interest_rate.as_str()),
    ];
    if let Some(term) = args.loan_term.as_deref() {
        answers.push((Field::LoanTerm, term));
    }

    for (field, raw) in answers {
        let outcome = session.submit(field, Some(raw));
        writeln!(output, "{}", outcome.message())?;
        if !outcome.is_accepted() {
            return Ok(());
        }
    }

    writeln!(output, "\n{}", session.summary().text())?;
    Ok(())
}
