use anyhow::Result;
use coursecal::cli::{CliArgs, print_help};
use coursecal::config::Config;
use coursecal::context::StandardContext;
use coursecal::pipeline;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;

// Upper bound on listed occurrences per event in --preview mode.
const PREVIEW_LIMIT: usize = 366;

fn main() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;

    if args.help {
        print_help("coursecal");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let mut config = Config::load(&ctx)?;
    args.apply(&mut config);

    TermLogger::init(
        config.level_filter(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    if args.preview {
        let outcome = pipeline::plan(&config)?;
        for event in &outcome.events {
            println!(
                "{} @ {} [{}]",
                event.title,
                event.location,
                event.recurrence.to_rrule_value()
            );
            for start in event.occurrences(PREVIEW_LIMIT)? {
                println!("    {}", start.format("%a %Y-%m-%d %H:%M"));
            }
        }
        report_skipped(&outcome.skipped);
        return Ok(());
    }

    let report = pipeline::convert(&config)?;
    report_skipped(&report.skipped);
    println!("ics file saved at: {}", report.output_path.display());
    Ok(())
}

fn report_skipped(skipped: &[pipeline::RowFailure]) {
    if skipped.is_empty() {
        return;
    }
    eprintln!("{} meeting pattern(s) skipped:", skipped.len());
    for failure in skipped {
        eprintln!("    {}: {}", failure.row.section, failure.error);
    }
}
