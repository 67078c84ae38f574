use std::{
    env,
    path::{
        Path,
        PathBuf,
    },
    process,
};

use chistometro::{
    corpus,
    export,
    persistence::load_prefs,
    render::{
        BarChartRenderer,
        WordCloudRenderer,
    },
    FacetLevel,
    FilterSelection,
    Session,
    StageOutcome,
};

const NO_JOKES_MSG: &str = "No hay chistes disponibles para este filtro.";
const NO_WORDS_MSG: &str = "No hay palabras suficientes para mostrar el conteo.";

struct TextCloud;

impl WordCloudRenderer for TextCloud {
    fn render(&mut self, words: &[String]) {
        println!("Wordcloud de chistes ({} palabras):", words.len());
        println!("  {}", words.join(" "));
    }
}

struct TextChart;

impl BarChartRenderer for TextChart {
    fn render(&mut self, rows: &[(String, u32)]) {
        let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(1);
        for (label, value) in rows {
            let width = ((value * 40) / max).max(1) as usize;
            println!("  {:<18} {} {}", label, "█".repeat(width), value);
        }
    }
}

fn main() {
    let path: PathBuf = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            eprintln!("Uso: chistometro <jokes_df.csv>");
            process::exit(2);
        }
    };

    let corpus = match corpus::load_global(&path) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("No se pudo cargar el corpus: {}", e);
            process::exit(1);
        }
    };

    let prefs = load_prefs();
    let mut session = Session::new(corpus);
    session.set_stopword_config(prefs.to_stopword_config());

    println!("\nUna mirada al humor en el Festival Internacional de Viña del Mar\n");
    for (name, level) in [
        ("Décadas", FacetLevel::Decade),
        ("Festivales", FacetLevel::Edition),
        ("Humoristas", FacetLevel::Performer),
    ] {
        println!("{}: {}", name, session.facet_options(level).join(", "));
    }

    // The demo walks the full reveal chain over the unfiltered corpus
    session.set_filter(FilterSelection::default());

    session.reveal_raw();
    println!("\nDataset original sin limpiar: {} chistes", session.filtered_records().len());

    match session.clean() {
        StageOutcome::Advanced => {
            let sequences = session.cleaned_tokens().unwrap_or(&[]);
            let token_count: usize = sequences.iter().map(|tokens| tokens.len()).sum();
            println!("Dataset sin stopwords y signos de puntuación: {} tokens", token_count);
        }
        StageOutcome::NoData => println!("{}", NO_JOKES_MSG),
        StageOutcome::NoOp => {}
    }

    println!();
    match session.reveal_cloud() {
        StageOutcome::Advanced => {
            session.render_cloud(&mut TextCloud);
        }
        StageOutcome::NoData => println!("{}", NO_JOKES_MSG),
        StageOutcome::NoOp => {}
    }

    println!("\nTop 10 palabras más frecuentes:");
    match session.reveal_top10() {
        StageOutcome::Advanced => {
            session.render_top_chart(&mut TextChart);
        }
        StageOutcome::NoData => println!("{}", NO_WORDS_MSG),
        StageOutcome::NoOp => {}
    }

    if let Some(table) = session.frequency_table() {
        if !table.is_empty() {
            let filename = export::default_export_filename();
            match export::write_frequency_csv(&table, Path::new(&filename)) {
                Ok(()) => println!("\nLista de palabras con frecuencias: {}", filename),
                Err(e) => eprintln!("No se pudo exportar el CSV: {}", e),
            }
        }
    }
}
