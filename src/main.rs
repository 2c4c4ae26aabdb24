use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use paletteer::catalog::{self, CATEGORIES, THEMES};
use paletteer::cli::{Args, Command, FavoritesAction};
use paletteer::color::Color;
use paletteer::mood::analyze_mood;
use paletteer::pipeline::extract::{extract_dominant, load_rgba, PixelBuffer};
use paletteer::pipeline::generate::{generate_harmonious, generate_harmonious_with};
use paletteer::pipeline::pick::sample_grid;
use paletteer::psychology::{classify, PsychologyRecord};
use paletteer::report;
use paletteer::store::favorites::{default_data_dir, FavoritesStore, JsonFavorites};
use paletteer::tui;

#[derive(Serialize)]
struct Classified {
    color: Color,
    #[serde(flatten)]
    record: PsychologyRecord,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a palette as JSON or as swatches with its mood.
fn emit_palette(colors: &[Color], json: bool) -> Result<()> {
    if json {
        print_json(colors)
    } else {
        print!("{}", report::palette(colors));
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("{args:?}");
    let json = args.json;

    match args.command {
        Command::Generate { count, seed } => {
            let colors = match seed {
                Some(seed) => generate_harmonious_with(count, &mut StdRng::seed_from_u64(seed)),
                None => generate_harmonious(count),
            };
            emit_palette(&colors, json)?;
        }

        Command::Extract { image, count } => {
            let img = load_rgba(&image)?;
            let pixels = PixelBuffer::from_image(&img)?;
            emit_palette(&extract_dominant(&pixels, count), json)?;
        }

        Command::Sample { image, x, y, grid } => {
            if grid == 0 {
                bail!("grid size must be at least 1");
            }
            let img = load_rgba(&image)?;
            let pixels = PixelBuffer::from_image(&img)?;
            let sample = sample_grid(&pixels, x, y, grid);
            if json {
                print_json(&sample)?;
            } else {
                print!("{}", report::grid(&sample));
            }
        }

        Command::Pick { image } => {
            let img = load_rgba(&image)?;
            let pixels = PixelBuffer::from_image(&img)?;
            let picks = tui::run(pixels)?;
            if picks.is_empty() {
                eprintln!("no colors picked");
            } else {
                emit_palette(&picks, json)?;
            }
        }

        Command::Classify { colors } => {
            if json {
                let classified: Vec<Classified> = colors
                    .iter()
                    .map(|&color| Classified {
                        color,
                        record: classify(color),
                    })
                    .collect();
                print_json(&classified)?;
            } else {
                print!("{}", report::psychology(&colors));
            }
        }

        Command::Mood { colors } => {
            if json {
                print_json(&analyze_mood(&colors))?;
            } else {
                print!("{}{}", report::swatches(&colors), report::mood(&colors));
            }
        }

        Command::Search { query } => {
            let hits = catalog::search(&query);
            if json {
                print_json(&hits)?;
            } else if hits.is_empty() {
                eprintln!("no palettes match {query:?}");
            } else {
                for p in hits {
                    println!("{}", report::keyword_palette(p));
                }
            }
        }

        Command::Category { id: None } => {
            if json {
                print_json(CATEGORIES)?;
            } else {
                for c in CATEGORIES {
                    println!("{} {:<8} {}", c.icon, c.id, c.description);
                }
            }
        }

        Command::Category { id: Some(id) } => {
            let palettes = catalog::by_category(&id);
            if palettes.is_empty() {
                let known: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
                bail!("unknown category {id:?}, expected one of: {}", known.join(", "));
            }
            if json {
                print_json(&palettes)?;
            } else {
                for p in palettes {
                    println!("{}", report::keyword_palette(p));
                }
            }
        }

        Command::Theme { name: None } => {
            if json {
                let names: Vec<&str> = THEMES.iter().map(|(name, _)| *name).collect();
                print_json(&names)?;
            } else {
                for (name, colors) in THEMES {
                    println!("{name}\n{}", report::swatches(colors));
                }
            }
        }

        Command::Theme { name: Some(name) } => match catalog::theme(&name) {
            Some(colors) => emit_palette(colors, json)?,
            None => {
                let known: Vec<&str> = THEMES.iter().map(|(name, _)| *name).collect();
                bail!("unknown theme {name:?}, expected one of: {}", known.join(", "));
            }
        },

        Command::Suggest { count } => {
            let picks = catalog::random_palettes(count, &mut rand::thread_rng());
            if json {
                print_json(&picks)?;
            } else {
                for p in picks {
                    println!("{}", report::keyword_palette(p));
                }
            }
        }

        Command::Favorites { action } => {
            let dir = args.data_dir.unwrap_or_else(default_data_dir);
            let mut store = JsonFavorites::new(&dir);
            debug!("favorites file {}", store.path().display());

            match action {
                FavoritesAction::List => {
                    let favorites = store.list()?;
                    if json {
                        print_json(&favorites)?;
                    } else if favorites.is_empty() {
                        eprintln!("no saved palettes");
                    } else {
                        for f in &favorites {
                            println!("{}", report::favorite(f));
                        }
                    }
                }
                FavoritesAction::Add { colors, theme } => {
                    let saved = store.save(colors, theme)?;
                    if json {
                        print_json(&saved)?;
                    } else {
                        println!("{}", report::favorite(&saved));
                    }
                }
                FavoritesAction::Remove { id } => {
                    if !store.remove(&id)? {
                        bail!("no saved palette with id {id}");
                    }
                    eprintln!("removed {id}");
                }
                FavoritesAction::Clear => {
                    store.clear()?;
                    eprintln!("cleared saved palettes");
                }
            }
        }
    }

    Ok(())
}
