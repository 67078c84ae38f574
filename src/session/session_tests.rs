use crate::{
    core::{
        FacetSelection,
        FilterSelection,
        JokeRecord,
        StopwordConfig,
    },
    corpus::Corpus,
    render::{
        BarChartRenderer,
        WordCloudRenderer,
    },
    session::{
        DisclosureStage,
        Session,
        StageOutcome,
    },
};

fn joke(decade: &str, edition: &str, performer: &str, text: &str) -> JokeRecord {
    JokeRecord {
        decade: decade.to_string(),
        edition: edition.to_string(),
        performer: performer.to_string(),
        text: text.to_string(),
    }
}

fn sample_corpus() -> Corpus {
    Corpus::from_records(vec![
        joke("90", "Viña 1993", "Dino Gordillo", "¡Hola, Hola Mundo!"),
        joke("90", "Viña 1995", "Coco Legrand", "El público aplaude fuerte."),
        joke("2000", "Viña 2007", "Bombo Fica", "¿Cachai el chiste del perro flaco?"),
    ])
}

fn decade_filter(decade: &str) -> FilterSelection {
    FilterSelection {
        decades: FacetSelection::from_choices(vec![decade.to_string()]),
        ..FilterSelection::default()
    }
}

struct CountingCloud {
    calls: usize,
}

impl WordCloudRenderer for CountingCloud {
    fn render(&mut self, words: &[String]) {
        assert!(!words.is_empty(), "renderer must never see empty input");
        self.calls += 1;
    }
}

struct CountingChart {
    calls: usize,
}

impl BarChartRenderer for CountingChart {
    fn render(&mut self, rows: &[(String, u32)]) {
        assert!(!rows.is_empty(), "renderer must never see empty input");
        self.calls += 1;
    }
}

#[test]
fn stages_advance_only_in_order() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);

    // Nothing can fire before its predecessor
    assert_eq!(session.reveal_cloud(), StageOutcome::NoOp);
    assert_eq!(session.reveal_top10(), StageOutcome::NoOp);
    assert_eq!(session.clean(), StageOutcome::NoOp);
    assert_eq!(session.stage(), DisclosureStage::Initial);

    assert_eq!(session.reveal_raw(), StageOutcome::Advanced);
    assert_eq!(session.reveal_top10(), StageOutcome::NoOp);
    assert_eq!(session.clean(), StageOutcome::Advanced);
    assert_eq!(session.reveal_cloud(), StageOutcome::Advanced);
    assert_eq!(session.reveal_top10(), StageOutcome::Advanced);
    assert_eq!(session.stage(), DisclosureStage::Top10Shown);
}

#[test]
fn later_stage_implies_every_earlier_gate() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.reveal_raw();
    session.clean();
    session.reveal_cloud();

    let stage = session.stage();
    assert!(stage.cloud_shown());
    assert!(stage.cleaned());
    assert!(stage.raw_shown());
    assert!(!stage.top10_shown());
}

#[test]
fn repeated_reveals_are_noops() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    assert_eq!(session.reveal_raw(), StageOutcome::Advanced);
    assert_eq!(session.reveal_raw(), StageOutcome::NoOp);
    session.clean();
    assert_eq!(session.clean(), StageOutcome::NoOp);
}

#[test]
fn hola_mundo_end_to_end() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.set_filter(FilterSelection {
        performers: FacetSelection::from_choices(vec!["Dino Gordillo".to_string()]),
        ..FilterSelection::default()
    });

    session.reveal_raw();
    assert_eq!(session.clean(), StageOutcome::Advanced);
    assert_eq!(
        session.cleaned_tokens().unwrap(),
        &[vec!["hola".to_string(), "hola".to_string(), "mundo".to_string()]]
    );

    session.reveal_cloud();
    assert_eq!(
        session.cloud_words().unwrap(),
        &["hola".to_string(), "hola".to_string(), "mundo".to_string()]
    );

    let table = session.frequency_table().unwrap();
    assert_eq!(table.count("hola"), 2);
    assert_eq!(table.count("mundo"), 1);
    assert_eq!(table.top_k(1), vec![("hola".to_string(), 2)]);

    session.set_top_k(1);
    assert_eq!(session.reveal_top10(), StageOutcome::Advanced);
    assert_eq!(session.top_words().unwrap(), &[("hola".to_string(), 2)]);
}

#[test]
fn empty_filter_reports_no_data_and_never_invokes_renderers() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.set_filter(decade_filter("80")); // decade with no records

    assert_eq!(session.reveal_raw(), StageOutcome::NoData);
    assert_eq!(session.clean(), StageOutcome::NoData);
    assert_eq!(session.cleaned_tokens().unwrap().len(), 0);

    assert_eq!(session.reveal_cloud(), StageOutcome::NoData);
    assert_eq!(session.reveal_top10(), StageOutcome::NoData);

    let mut cloud = CountingCloud { calls: 0 };
    let mut chart = CountingChart { calls: 0 };
    assert!(!session.render_cloud(&mut cloud));
    assert!(!session.render_top_chart(&mut chart));
    assert_eq!(cloud.calls, 0);
    assert_eq!(chart.calls, 0);

    // The gates still opened; the UI shows "no data" messages instead
    assert!(session.stage().top10_shown());
}

#[test]
fn renderers_fire_once_data_exists() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.reveal_raw();
    session.clean();

    let mut cloud = CountingCloud { calls: 0 };
    // Cloud gate not open yet
    assert!(!session.render_cloud(&mut cloud));

    session.reveal_cloud();
    assert!(session.render_cloud(&mut cloud));
    assert_eq!(cloud.calls, 1);

    session.reveal_top10();
    let mut chart = CountingChart { calls: 0 };
    assert!(session.render_top_chart(&mut chart));
    assert_eq!(chart.calls, 1);
}

#[test]
fn reset_closes_gates_and_discards_caches() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.reveal_raw();
    session.clean();
    session.reveal_cloud();
    session.reveal_top10();
    assert!(session.stage().top10_shown());

    session.reset();
    assert_eq!(session.stage(), DisclosureStage::Initial);
    assert!(session.cleaned_tokens().is_none());
    assert!(session.cloud_words().is_none());
    assert!(session.top_words().is_none());
    assert!(session.frequency_table().is_none());

    // Skipping ahead after reset stays rejected until the chain is replayed
    assert_eq!(session.reveal_cloud(), StageOutcome::NoOp);
    assert_eq!(session.reveal_top10(), StageOutcome::NoOp);
    assert_eq!(session.reveal_raw(), StageOutcome::Advanced);
    assert_eq!(session.reveal_cloud(), StageOutcome::NoOp);
    assert_eq!(session.clean(), StageOutcome::Advanced);
    assert_eq!(session.reveal_cloud(), StageOutcome::Advanced);
}

#[test]
fn filter_change_auto_resets_the_session() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.reveal_raw();
    session.clean();
    assert!(session.cleaned_tokens().is_some());

    session.set_filter(decade_filter("90"));
    assert_eq!(session.stage(), DisclosureStage::Initial);
    assert!(session.cleaned_tokens().is_none());

    // Re-applying the identical selection must not reset
    session.reveal_raw();
    session.set_filter(decade_filter("90"));
    assert_eq!(session.stage(), DisclosureStage::RawShown);
}

#[test]
fn stopword_change_auto_resets_the_session() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.reveal_raw();
    session.clean();

    let mut config = StopwordConfig::new();
    config.parse_extra("hola");
    session.set_stopword_config(config.clone());
    assert_eq!(session.stage(), DisclosureStage::Initial);

    // Identical config is not a change
    session.reveal_raw();
    session.set_stopword_config(config);
    assert_eq!(session.stage(), DisclosureStage::RawShown);
}

#[test]
fn export_table_is_gated_on_cleaning() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    assert!(session.frequency_table().is_none());
    session.reveal_raw();
    assert!(session.frequency_table().is_none());
    session.clean();
    let table = session.frequency_table().unwrap();
    assert!(table.count("hola") >= 2);
}

#[test]
fn facet_options_follow_the_session_filter() {
    let corpus = sample_corpus();
    let mut session = Session::new(&corpus);
    session.set_filter(decade_filter("90"));

    let editions = session.facet_options(crate::core::FacetLevel::Edition);
    assert_eq!(editions, vec!["Todos", "Viña 1993", "Viña 1995"]);
}
