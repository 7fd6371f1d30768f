//src/main.rs
mod cli; // Keep cli module for parsing args

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::io::{self, stdout, Read};

use planilha_lib::{compute_loads, parse_color, AppService, SeriesLoad};

fn main() -> Result<()> {
    // --- Check for completion generation request FIRST ---
    let cli_args = cli::parse_args();

    if let cli::Commands::GenerateCompletion { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command();
        let bin_name = cmd.get_name().to_string();

        eprintln!("Generating completion script for {}...", shell); // Print to stderr
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout());
        return Ok(());
    }

    // Initialize the application service (loads config)
    let mut service =
        AppService::initialize().context("Failed to initialize application service")?;
    let header_color = header_color(&service);

    match cli_args.command {
        cli::Commands::GenerateCompletion { .. } => {
            // Handled above, kept for exhaustiveness
            unreachable!("Completion generation should have exited already");
        }
        cli::Commands::Import {
            files,
            exclude,
            exclude_all,
            query,
            export_csv,
        } => {
            for file in &files {
                match service.import_file(file) {
                    Ok(report) => println!(
                        "Imported '{}': {} new name(s), {} total.",
                        file.display(),
                        report.added,
                        report.total
                    ),
                    Err(e) => bail!("Error importing '{}': {}", file.display(), e),
                }
            }
            if exclude_all {
                service.remove_all_imported();
                println!("Excluded every imported name.");
            } else if !exclude.is_empty() {
                service.remove_imported_names(&exclude);
                println!("Excluded {} name(s) from the imported set.", exclude.len());
            }
            let names = collect_names(&service, query.as_deref());
            if export_csv {
                print_names_csv(&names)?;
            } else {
                print_names_table(&names, header_color);
            }
        }
        cli::Commands::Paste { text, export_csv } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buffer = String::new();
                    io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read the pasted list from stdin")?;
                    buffer
                }
            };
            match service.import_pasted(&text) {
                Ok(report) => println!(
                    "Imported pasted list: {} new name(s), {} total.",
                    report.added, report.total
                ),
                Err(e) => bail!("Error importing pasted list: {}", e),
            }
            let names = collect_names(&service, None);
            if export_csv {
                print_names_csv(&names)?;
            } else {
                print_names_table(&names, header_color);
            }
        }
        cli::Commands::Loads {
            weights,
            warmup_sets,
            preparation_sets,
            valid_sets,
        } => {
            let sets_template = SeriesLoad {
                warmup_sets,
                preparation_sets,
                valid_sets,
                ..Default::default()
            };
            print_loads_table(&weights, &sets_template, header_color);
        }
    }

    Ok(())
}

fn header_color(service: &AppService) -> Color {
    parse_color(&service.config.theme.header_color)
        .map(Color::from)
        .unwrap_or(Color::Green)
}

/// Name plus whether it carries import provenance, filtered by an
/// optional autocomplete query.
fn collect_names(service: &AppService, query: Option<&str>) -> Vec<(String, bool)> {
    service
        .autocomplete(query.unwrap_or(""))
        .map(|name| {
            let imported = service
                .registry
                .imported_names()
                .iter()
                .any(|n| n == name);
            (name.to_string(), imported)
        })
        .collect()
}

fn print_names_table(names: &[(String, bool)], header_color: Color) {
    if names.is_empty() {
        println!("No names in the registry.");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Exercise")
                .fg(header_color)
                .add_attribute(Attribute::Bold),
            Cell::new("Imported")
                .fg(header_color)
                .add_attribute(Attribute::Bold),
        ]);
    for (name, imported) in names {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(if *imported { "yes" } else { "" }),
        ]);
    }
    println!("{table}");
}

fn print_names_csv(names: &[(String, bool)]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["Exercise", "Imported"])?;
    for (name, imported) in names {
        writer.write_record([name.as_str(), if *imported { "yes" } else { "no" }])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_loads_table(weights: &[f64], sets_template: &SeriesLoad, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Warm-up (50%)")
                .fg(header_color)
                .add_attribute(Attribute::Bold),
            Cell::new("Prep. (70%)")
                .fg(header_color)
                .add_attribute(Attribute::Bold),
            Cell::new("Valid (100%)")
                .fg(header_color)
                .add_attribute(Attribute::Bold),
        ]);
    for &weight in weights {
        let load = compute_loads(weight, Some(sets_template));
        table.add_row(vec![
            Cell::new(format!("{} kg × {}", load.warmup, load.warmup_sets)),
            Cell::new(format!("{} kg × {}", load.preparation, load.preparation_sets)),
            Cell::new(format!("{} kg × {}", load.valid, load.valid_sets)),
        ]);
    }
    println!("{table}");
}
