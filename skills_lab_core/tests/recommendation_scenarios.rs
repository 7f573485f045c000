/// Recommendation scenarios against the built-in catalog
use proptest::prelude::*;
use skills_lab_core::{
    compatibility_score, Career, Catalog, Profile, Recommender, RecommenderConfig, SkillLevel,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn level(n: i64) -> SkillLevel {
    SkillLevel::try_from(n).unwrap()
}

fn ana_profile(catalog: &Catalog) -> Profile {
    let strong = [
        "Lógica de Programação",
        "Pensamento Analítico",
        "Curiosidade",
        "Colaboração",
        "Resolução de Problemas",
    ];
    let mut profile = Profile::new("Ana");
    for skill in catalog.skills() {
        let value = if strong.contains(&skill.name.as_str()) { 5 } else { 1 };
        profile.set_level(&skill.name, level(value));
    }
    profile
}

#[test]
fn test_ana_top_recommendation_is_data_scientist() {
    init_logging();
    let catalog = Catalog::builtin();
    let recommender = Recommender::new(catalog, RecommenderConfig::default());

    let lines = recommender.recommend_careers(&ana_profile(catalog));

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Cientista de Dados - Compatibilidade: 100.0%");
}

#[test]
fn test_ana_tracks_cover_only_level_one_skills() {
    init_logging();
    let catalog = Catalog::builtin();
    let recommender = Recommender::new(catalog, RecommenderConfig::default());

    let lines = recommender.recommend_tracks(&ana_profile(catalog));

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Para melhorar em 'Criatividade', considere: Praticar brainstormings e design thinking, Participar de workshops de inovação"
    );
    assert!(lines.iter().all(|l| !l.contains("'Curiosidade'")));
    assert!(lines.last().unwrap().contains("'Liderança'"));
}

#[test]
fn test_all_skills_at_five_scores_100_everywhere() {
    let catalog = Catalog::builtin();
    let mut profile = Profile::new("Max");
    for skill in catalog.skills() {
        profile.set_level(&skill.name, level(5));
    }
    for career in catalog.careers() {
        assert_eq!(compatibility_score(career, &profile), 100.0, "{}", career.name);
    }
}

#[test]
fn test_empty_profile_scores_zero_and_keeps_catalog_order() {
    let catalog = Catalog::builtin();
    let recommender = Recommender::new(catalog, RecommenderConfig::default());

    let ranked = recommender.rank_careers(&Profile::new("Vazio"), 6);
    let names: Vec<_> = ranked.iter().map(|m| m.career.name.as_str()).collect();
    let catalog_names: Vec<_> = catalog.careers().iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, catalog_names);
    assert!(ranked.iter().all(|m| m.score == 0.0));
    assert!(recommender.suggest_tracks(&Profile::new("Vazio")).is_empty());
}

#[test]
fn test_custom_limit() {
    let catalog = Catalog::builtin();
    let config = RecommenderConfig {
        max_careers: 5,
        ..Default::default()
    };
    let recommender = Recommender::new(catalog, config);
    assert_eq!(recommender.recommend_careers(&Profile::new("Ana")).len(), 5);
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    let skills: Vec<String> = Catalog::builtin()
        .skills()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    proptest::collection::vec(proptest::option::of(1i64..=5), skills.len()).prop_map(
        move |levels| {
            let mut profile = Profile::new("Prop");
            for (skill, value) in skills.iter().zip(levels) {
                if let Some(value) = value {
                    profile.set_level(skill, level(value));
                }
            }
            profile
        },
    )
}

proptest! {
    #[test]
    fn prop_scores_stay_within_bounds(profile in arb_profile()) {
        for career in Catalog::builtin().careers() {
            let score = compatibility_score(career, &profile);
            prop_assert!((0.0..=100.0).contains(&score), "{} scored {}", career.name, score);
        }
    }

    #[test]
    fn prop_zero_weight_career_always_scores_zero(profile in arb_profile()) {
        let career = Career::new("Sem Requisitos");
        prop_assert_eq!(compatibility_score(&career, &profile), 0.0);
    }

    #[test]
    fn prop_suggestions_only_for_rated_low_skills(profile in arb_profile()) {
        let recommender = Recommender::new(Catalog::builtin(), RecommenderConfig::default());
        for suggestion in recommender.suggest_tracks(&profile) {
            let rated = profile.skill_levels.get(&suggestion.skill);
            prop_assert!(rated.is_some());
            prop_assert!(rated.unwrap().value() < 3);
        }
    }

    #[test]
    fn prop_ranking_is_sorted_descending(profile in arb_profile()) {
        let recommender = Recommender::new(Catalog::builtin(), RecommenderConfig::default());
        let ranked = recommender.score_all(&profile);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
