//! Built-in Catalog
//!
//! Skills, careers and per-skill learning tracks. The built-in catalog is
//! constructed once on first use and never mutated afterwards.

use crate::types::{Career, LearningTrack, Skill};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const TECNICA: &str = "Técnica";
const COMPORTAMENTAL: &str = "Comportamental";

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Skill, career and learning track tables in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    skills: Vec<Skill>,
    careers: Vec<Career>,
    tracks: Vec<LearningTrack>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::new(default_skills(), default_careers(), default_tracks());
    log::debug!(
        "[CATALOG] Built-in catalog loaded: {} skills, {} careers, {} tracks",
        catalog.skills.len(),
        catalog.careers.len(),
        catalog.tracks.len()
    );
    catalog
});

impl Catalog {
    pub fn new(skills: Vec<Skill>, careers: Vec<Career>, tracks: Vec<LearningTrack>) -> Self {
        Self {
            skills,
            careers,
            tracks,
        }
    }

    /// The catalog shipped with the application
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn tracks(&self) -> &[LearningTrack] {
        &self.tracks
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn career(&self, name: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.name == name)
    }

    /// Learning resources for a skill, if the skill has a track
    pub fn track_for(&self, skill: &str) -> Option<&[String]> {
        self.tracks
            .iter()
            .find(|t| t.skill == skill)
            .map(|t| t.resources.as_slice())
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new(
            "Lógica de Programação",
            TECNICA,
            "Capacidade de entender algoritmos e estruturas lógicas",
        ),
        Skill::new(
            "Criatividade",
            COMPORTAMENTAL,
            "Habilidade de propor soluções inovadoras e originais",
        ),
        Skill::new(
            "Colaboração",
            COMPORTAMENTAL,
            "Trabalhar bem em equipe e compartilhar conhecimento",
        ),
        Skill::new(
            "Adaptabilidade",
            COMPORTAMENTAL,
            "Capacidade de se ajustar rapidamente a mudanças",
        ),
        Skill::new(
            "Pensamento Analítico",
            TECNICA,
            "Analisar dados e problemas de forma estruturada",
        ),
        Skill::new(
            "Inteligência Artificial",
            TECNICA,
            "Conhecimento em algoritmos e ferramentas de IA",
        ),
        Skill::new(
            "Comunicação",
            COMPORTAMENTAL,
            "Expressar ideias de forma clara e objetiva",
        ),
        Skill::new(
            "Resolução de Problemas",
            COMPORTAMENTAL,
            "Diagnosticar e resolver problemas de forma eficaz",
        ),
        Skill::new(
            "Curiosidade",
            COMPORTAMENTAL,
            "Desejo contínuo de aprender coisas novas",
        ),
        Skill::new(
            "Liderança",
            COMPORTAMENTAL,
            "Influenciar e motivar pessoas para atingir objetivos",
        ),
    ]
}

fn default_tracks() -> Vec<LearningTrack> {
    vec![
        LearningTrack::new(
            "Lógica de Programação",
            &[
                "Curso introdutório de lógica no Codecademy",
                "Resolver desafios em plataformas como HackerRank ou LeetCode",
            ],
        ),
        LearningTrack::new(
            "Criatividade",
            &[
                "Praticar brainstormings e design thinking",
                "Participar de workshops de inovação",
            ],
        ),
        LearningTrack::new(
            "Colaboração",
            &["Trabalhar em projetos em equipe", "Estudar metodologias ágeis"],
        ),
        LearningTrack::new(
            "Adaptabilidade",
            &[
                "Participar de cursos sobre gestão de mudanças",
                "Exercitar flexibilidade em projetos multidisciplinares",
            ],
        ),
        LearningTrack::new(
            "Pensamento Analítico",
            &[
                "Aprender estatística básica e análise de dados",
                "Praticar interpretação de dashboards e gráficos",
            ],
        ),
        LearningTrack::new(
            "Inteligência Artificial",
            &[
                "Fazer um curso de introdução ao Machine Learning",
                "Explorar bibliotecas de IA como TensorFlow ou PyTorch",
            ],
        ),
        LearningTrack::new(
            "Comunicação",
            &[
                "Participar de debates e apresentações",
                "Estudar técnicas de storytelling",
            ],
        ),
        LearningTrack::new(
            "Resolução de Problemas",
            &[
                "Praticar lógica e quebra-cabeças",
                "Aplicar metodologias como Design Thinking",
            ],
        ),
        LearningTrack::new(
            "Curiosidade",
            &[
                "Ler artigos de diferentes áreas regularmente",
                "Explorar novos hobbies e ferramentas",
            ],
        ),
        LearningTrack::new(
            "Liderança",
            &[
                "Participar de cursos de gestão de equipes",
                "Ler biografias de líderes inspiradores",
            ],
        ),
    ]
}

fn default_careers() -> Vec<Career> {
    vec![
        Career::new("Cientista de Dados")
            .with_skill("Lógica de Programação", 0.25)
            .with_skill("Pensamento Analítico", 0.30)
            .with_skill("Curiosidade", 0.10)
            .with_skill("Colaboração", 0.10)
            .with_skill("Resolução de Problemas", 0.25)
            .with_track(&[
                "Curso de programação em Python",
                "Especialização em ciência de dados e estatística",
                "Projetos práticos de análise de dados",
            ]),
        Career::new("Engenheiro de Software")
            .with_skill("Lógica de Programação", 0.30)
            .with_skill("Resolução de Problemas", 0.25)
            .with_skill("Colaboração", 0.15)
            .with_skill("Adaptabilidade", 0.15)
            .with_skill("Comunicação", 0.15)
            .with_track(&[
                "Curso avançado de programação orientada a objetos",
                "Prática de versionamento com Git e GitHub",
                "Contribuição para projetos open source",
            ]),
        Career::new("Designer de UX")
            .with_skill("Criatividade", 0.30)
            .with_skill("Comunicação", 0.20)
            .with_skill("Curiosidade", 0.10)
            .with_skill("Colaboração", 0.20)
            .with_skill("Adaptabilidade", 0.20)
            .with_track(&[
                "Cursos de design de interface e experiência do usuário",
                "Estudos de usabilidade e comportamento do usuário",
                "Construção de portfólio com projetos de design",
            ]),
        Career::new("Especialista em Cibersegurança")
            .with_skill("Lógica de Programação", 0.20)
            .with_skill("Pensamento Analítico", 0.30)
            .with_skill("Resolução de Problemas", 0.30)
            .with_skill("Adaptabilidade", 0.20)
            .with_track(&[
                "Formação em segurança da informação",
                "Certificações como CEH ou CompTIA Security+",
                "Prática em ambientes de captura a bandeira (CTF)",
            ]),
        Career::new("Engenheiro de Machine Learning")
            .with_skill("Lógica de Programação", 0.20)
            .with_skill("Inteligência Artificial", 0.40)
            .with_skill("Pensamento Analítico", 0.25)
            .with_skill("Curiosidade", 0.15)
            .with_track(&[
                "Curso intensivo de Machine Learning",
                "Projetos de IA aplicados a problemas reais",
                "Estudo de algoritmos avançados de aprendizado",
            ]),
        Career::new("Empreendedor Tecnológico")
            .with_skill("Criatividade", 0.30)
            .with_skill("Liderança", 0.30)
            .with_skill("Adaptabilidade", 0.20)
            .with_skill("Comunicação", 0.20)
            .with_track(&[
                "Cursos de empreendedorismo e inovação",
                "Participação em hackathons e incubadoras",
                "Leitura sobre modelos de negócio e startups",
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skills().len(), 10);
        assert_eq!(catalog.careers().len(), 6);
        assert_eq!(catalog.tracks().len(), 10);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skills()[0].name, "Lógica de Programação");
        assert_eq!(catalog.skills()[9].name, "Liderança");
        assert_eq!(catalog.careers()[0].name, "Cientista de Dados");
        assert_eq!(catalog.careers()[5].name, "Empreendedor Tecnológico");
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::builtin();
        let skills: HashSet<_> = catalog.skills().iter().map(|s| &s.name).collect();
        let careers: HashSet<_> = catalog.careers().iter().map(|c| &c.name).collect();
        assert_eq!(skills.len(), catalog.skills().len());
        assert_eq!(careers.len(), catalog.careers().len());
    }

    #[test]
    fn test_career_weights_sum_to_one() {
        for career in Catalog::builtin().careers() {
            assert!(
                (career.total_weight() - 1.0).abs() < 1e-9,
                "{} weights sum to {}",
                career.name,
                career.total_weight()
            );
            assert_eq!(career.track.len(), 3);
        }
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skill("Curiosidade").unwrap().category, "Comportamental");
        assert!(catalog.skill("Culinária").is_none());
        assert_eq!(
            catalog.track_for("Comunicação").unwrap(),
            &[
                "Participar de debates e apresentações".to_string(),
                "Estudar técnicas de storytelling".to_string(),
            ]
        );
        assert!(catalog.track_for("Culinária").is_none());
        assert!(catalog.career("Designer de UX").is_some());
    }

    #[test]
    fn test_catalog_json_export() {
        let json = Catalog::builtin().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skills"].as_array().unwrap().len(), 10);
        assert_eq!(value["careers"][0]["name"], "Cientista de Dados");
        assert_eq!(value["careers"][0]["required_skills"][1]["weight"], 0.30);
    }
}
