//! Pattern Sewing Editor (Kommandozeile).
//!
//! Headless-Zugang zum Editor-Kern: Dokumente normalisieren, Testblöcke
//! generieren und Sewing-Richtungen prüfen.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pattern_sewing_editor::core::polyline::arc_length;
use pattern_sewing_editor::{
    classify, write_document, AppController, AppIntent, AppState, Direction, EditorOptions,
};
use std::path::PathBuf;

/// Pattern Sewing Editor CLI
///
/// Beispiele:
///   pattern-sewing-editor normalize blocks.json -o blocks.ratio.json
///   pattern-sewing-editor generate blocks.json --count 100 --seed 7
///   pattern-sewing-editor inspect blocks.json
#[derive(Parser, Debug)]
#[clap(
    name = "pattern-sewing-editor",
    version,
    about = "Ratio-gebundene Sewings auf Schnittmuster-Segmenten"
)]
struct Cli {
    /// Optionen-Datei (Standard: neben der Binary)
    #[clap(long = "config", global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dokument laden, Offsets in Ratios umrechnen, Sewings neu aufbauen und schreiben
    Normalize {
        /// Eingabe-Dokument (JSON)
        input: PathBuf,
        /// Ausgabe-Datei (Standard: stdout)
        #[clap(long = "output", short = 'o')]
        output: Option<PathBuf>,
    },
    /// Testblöcke aus den Blöcken eines Vorlagen-Dokuments erzeugen
    Generate {
        /// Vorlagen-Dokument (JSON)
        template: PathBuf,
        /// Anzahl zu erzeugender Blöcke
        #[clap(long = "count", short = 'n')]
        count: usize,
        /// Abstand zwischen Blöcken (Standard aus den Optionen)
        #[clap(long = "gap")]
        gap: Option<f32>,
        /// Seed für reproduzierbare Layouts
        #[clap(long = "seed")]
        seed: Option<u64>,
        /// Ausgabe-Datei (Standard: stdout)
        #[clap(long = "output", short = 'o')]
        output: Option<PathBuf>,
    },
    /// Blöcke, Segmente und Sewing-Richtungen eines Dokuments auflisten
    Inspect {
        /// Eingabe-Dokument (JSON)
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Pattern Sewing Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    match cli.command {
        Command::Normalize { input, output } => {
            controller.handle_intent(&mut state, AppIntent::OpenFileRequested { path: input })?;
            emit(&mut controller, &mut state, output)
        }
        Command::Generate {
            template,
            count,
            gap,
            seed,
            output,
        } => {
            controller
                .handle_intent(&mut state, AppIntent::OpenFileRequested { path: template })?;
            if let Some(gap) = gap {
                state.options.generation_gap = gap;
            }
            let gap = state.options.generation_gap;
            if count == 0 || !gap.is_finite() || gap < 0.0 {
                bail!("Ungültige Parameter: count = {}, gap = {}", count, gap);
            }
            if state.source_blocks.is_empty() {
                bail!("Vorlagen-Dokument enthält keine Blöcke");
            }
            controller.handle_intent(&mut state, AppIntent::GenerateRequested { count, seed })?;
            emit(&mut controller, &mut state, output)
        }
        Command::Inspect { input } => {
            controller.handle_intent(&mut state, AppIntent::OpenFileRequested { path: input })?;
            inspect(&state);
            Ok(())
        }
    }
}

/// Schreibt die aktuellen Blöcke in eine Datei oder nach stdout.
fn emit(
    controller: &mut AppController,
    state: &mut AppState,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            controller.handle_intent(state, AppIntent::SaveRequested { path: Some(path) })
        }
        None => {
            let json = write_document(&state.blocks).context("Ausgabe fehlgeschlagen")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn inspect(state: &AppState) {
    for block in &state.blocks {
        let segments = block.segments().count();
        let closed = block.segments().filter(|s| s.is_closed()).count();
        println!(
            "Block {} \"{}\": {} Segment(e) ({} geschlossen), {} Sewing(s)",
            block.id,
            block.name,
            segments,
            closed,
            block.sewings().count()
        );
        for sewing in block.sewings() {
            let direction = block
                .segment(sewing.segment_id)
                .map(|parent| classify(&parent.vertexes, &sewing.vertexes))
                .unwrap_or(Direction::Unknown);
            println!(
                "  Sewing {} auf Segment {}: Ratio {:.3} → {:.3}, Länge {:.1}, Richtung {}",
                sewing.id,
                sewing.segment_id,
                sewing.ratio.start,
                sewing.ratio.end,
                arc_length(&sewing.vertexes),
                direction.label()
            );
        }
    }

    if let Some(report) = &state.last_report {
        println!(
            "Diagnose: {} alt / {} Ratio, {} ohne Eltern, {} ohne segmentId, {} degeneriert",
            report.legacy_sewings,
            report.ratio_sewings,
            report.unresolved_parents,
            report.orphan_sewings,
            report.degenerate_entities
        );
    }
}
