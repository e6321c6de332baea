use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;
use truckload::io::{export, import, read_workbook, write_workbook};
use truckload::solve::solve;
use truckload_cli::io::cli::Cli;
use truckload_cli::{io, EPOCH};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let bytes = fs::read(&args.input_file)
        .with_context(|| format!("could not read input file: {:?}", args.input_file))?;
    let ext_dataset = read_workbook(&bytes)?;
    let dataset = import(&ext_dataset)?;
    info!(
        "loaded {} shipment(s) and {} truck type(s) ({} unit(s))",
        dataset.shipments.len(),
        dataset.truck_types.len(),
        dataset.n_units()
    );

    let plan = solve(&dataset)?;
    let ext_plan = export(&dataset, &plan);

    {
        let plan_path = args
            .solution_folder
            .join(format!("plan_{input_file_stem}.xlsx"));
        let workbook = write_workbook(&ext_plan)?;
        fs::write(&plan_path, workbook)
            .with_context(|| format!("could not write plan workbook: {plan_path:?}"))?;
        info!("plan workbook written to {plan_path:?}");
    }

    {
        let json_path = args
            .solution_folder
            .join(format!("plan_{input_file_stem}.json"));
        io::write_json_plan(&ext_plan, &json_path)?;
    }

    info!("number of trucks used: {}", ext_plan.n_trucks_used);
    info!("time = {:.3} seconds", EPOCH.elapsed().as_secs_f64());

    Ok(())
}
