use billcast::{
    cli::{Args, CheckArgs, Command, CompareArgs, Format, OpenArgs, OutputArgs, ShareArgs},
    core::validation::Field,
    export::{to_csv, to_json, to_text},
    form::Form,
    prelude::*,
    tables::{build_bill_table, build_breakdown_table, build_metrics_table, build_scenarios_table},
};
use clap::{Parser, crate_version};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => {
            let CompareArgs { form, output } = *args;
            compare(&form, &output)?;
        }
        Command::Open(args) => {
            let OpenArgs { location, output } = *args;
            compare(&Form::from_location(&location)?, &output)?;
        }
        Command::Share(args) => share(&args)?,
        Command::Check(args) => check(&args)?,
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all)]
fn compare(form: &Form, output: &OutputArgs) -> Result {
    let utility = form.utility();
    let Some(inputs) = form.submit(output.start_year(), output.scenarios())? else {
        bail!("provide your charges, monthly usage, and annual usage to calculate the rate");
    };
    let outcome = inputs.calculate();
    if outcome.rate.is_none() {
        warn!("the rate cannot be derived from the entered charges and usage");
    }
    if inputs.alternative_cost.is_none() {
        info!("enter the alternative monthly cost to compare against");
    }

    match output.format {
        Format::Table => {
            println!("{}", build_bill_table(&inputs, &outcome, utility));
            if let Some(report) = &outcome.report {
                println!("{}", build_breakdown_table(&report.points, utility));
                println!("{}", build_metrics_table(&report.snapshot, report.points.len(), utility));
            }
            if !outcome.scenarios.is_empty() {
                println!("{}", build_scenarios_table(&outcome.scenarios, utility));
            }
        }
        Format::Csv => {
            let report = outcome.report.as_ref().context("nothing to compare yet")?;
            print!("{}", to_csv(&report.points, utility)?);
        }
        Format::Text => print!("{}", to_text(&inputs, &outcome, utility)),
        Format::Json => println!("{}", to_json(&outcome)?),
    }
    Ok(())
}

fn share(args: &ShareArgs) -> Result {
    args.form.validate()?;
    let query = args.form.to_query()?;
    match &args.base_url {
        Some(base_url) => println!("{}?{query}", base_url.trim_end_matches('?')),
        None => println!("?{query}"),
    }
    Ok(())
}

fn check(args: &CheckArgs) -> Result {
    let field: Field = args.field.parse()?;
    match field.validate(&args.value)? {
        Some(value) => println!("{field}: {value} is valid"),
        None => println!("{field}: blank"),
    }
    Ok(())
}
