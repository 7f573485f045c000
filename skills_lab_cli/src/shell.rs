//! Interaction Shell
//!
//! The main menu loop. Each menu choice runs a short sub-flow and returns to
//! the main menu; only the exit choice (or closed input) ends the loop.

use crate::prompt::Console;
use skills_lab_core::{Catalog, Profile, ProfileStore, Recommender, RecommenderConfig};
use std::io::{self, BufRead, Write};

const MENU: &str = "
========= Future Skills Lab =========
1. Cadastrar novo perfil
2. Listar perfis cadastrados
3. Gerar recomendações de carreira
4. Gerar trilhas de aprimoramento
5. Sair
";

pub const INVALID_PROFILE: &str = "Perfil inválido.";
pub const NO_PROFILES_FOR_CAREERS: &str = "Cadastre um perfil antes de gerar recomendações.";
pub const NO_PROFILES_FOR_TRACKS: &str =
    "Cadastre um perfil antes de gerar trilhas de aprimoramento.";
pub const FAREWELL: &str = "Saindo... obrigado por utilizar o Future Skills Lab!";

/// Configuration for the shell
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    pub recommender: RecommenderConfig,
    /// Print each recommended career's own learning track
    pub show_career_tracks: bool,
}

/// A main menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    List,
    RecommendCareers,
    RecommendTracks,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::RecommendCareers),
            "4" => Some(MenuChoice::RecommendTracks),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does after a sub-flow
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

/// Outcome of asking for a profile number
enum Selection {
    Position(usize),
    Invalid,
    Closed,
}

pub struct Shell<'a, R, W> {
    catalog: &'a Catalog,
    recommender: Recommender<'a>,
    store: ProfileStore,
    show_career_tracks: bool,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a Catalog, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            catalog,
            recommender: Recommender::new(catalog, config.recommender),
            store: ProfileStore::new(),
            show_career_tracks: config.show_career_tracks,
            console: Console::new(input, output),
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the menu loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("[SHELL] Session started");
        loop {
            self.console.line(MENU)?;
            let Some(answer) = self.console.ask("Escolha uma opção: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(choice) => {
                    log::debug!("[SHELL] Menu choice: {:?}", choice);
                    self.dispatch(choice)?
                }
                None => {
                    self.console.line("Opção inválida. Tente novamente.\n")?;
                    Flow::Menu
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        log::info!("[SHELL] Session ended with {} profiles", self.store.len());
        self.console.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Register => self.register(),
            MenuChoice::List => {
                self.list_profiles()?;
                Ok(Flow::Menu)
            }
            MenuChoice::RecommendCareers => self.recommend_careers(),
            MenuChoice::RecommendTracks => self.recommend_tracks(),
            MenuChoice::Exit => {
                self.console.line(FAREWELL)?;
                Ok(Flow::Exit)
            }
        }
    }

    fn register(&mut self) -> io::Result<Flow> {
        let Some(name) = self.console.ask("Digite seu nome: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            return Ok(Flow::Menu);
        }

        self.console
            .line(format!("\nCadastro de competências para {}:", name))?;

        let catalog = self.catalog;
        let mut profile = Profile::new(&name);
        for skill in catalog.skills() {
            match self.console.ask_level(&skill.name)? {
                Some(level) => profile.set_level(&skill.name, level),
                None => return Ok(Flow::Exit),
            }
        }

        let stored = self.store.register(profile);
        self.console
            .line(format!("\nPerfil '{}' cadastrado com sucesso!\n", stored.name))?;
        Ok(Flow::Menu)
    }

    fn list_profiles(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return self.console.line("Nenhum perfil cadastrado até o momento.\n");
        }
        self.console.line("\nPerfis cadastrados:")?;
        for (idx, profile) in self.store.profiles().iter().enumerate() {
            self.console.line(format!("{}. {}", idx + 1, profile.name))?;
        }
        self.console.line("")
    }

    /// Lists profiles and reads a 1-based position
    fn select_profile(&mut self, prompt: &str) -> io::Result<Selection> {
        self.list_profiles()?;
        let Some(answer) = self.console.ask(prompt)? else {
            return Ok(Selection::Closed);
        };
        match self.store.position(&answer) {
            Ok(position) => Ok(Selection::Position(position)),
            Err(e) => {
                log::debug!("[SHELL] Invalid profile selection: {}", e);
                self.console.line(format!("{}\n", INVALID_PROFILE))?;
                Ok(Selection::Invalid)
            }
        }
    }

    fn recommend_careers(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            self.console.line(format!("{}\n", NO_PROFILES_FOR_CAREERS))?;
            return Ok(Flow::Menu);
        }
        let position =
            match self.select_profile("Informe o número do perfil para ver as recomendações: ")? {
                Selection::Position(position) => position,
                Selection::Invalid => return Ok(Flow::Menu),
                Selection::Closed => return Ok(Flow::Exit),
            };
        let Some(profile) = self.store.get(position) else {
            return Ok(Flow::Menu);
        };

        let limit = self.recommender.config().max_careers;
        let matches = self.recommender.rank_careers(profile, limit);
        self.console
            .line(format!("\nRecomendações de carreira para {}:", profile.name))?;
        for career_match in &matches {
            self.console.line(format!("- {}", career_match))?;
            if self.show_career_tracks {
                for resource in &career_match.career.track {
                    self.console.line(format!("    • {}", resource))?;
                }
            }
        }
        self.console.line("")?;
        Ok(Flow::Menu)
    }

    fn recommend_tracks(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            self.console.line(format!("{}\n", NO_PROFILES_FOR_TRACKS))?;
            return Ok(Flow::Menu);
        }
        let position = match self.select_profile(
            "Informe o número do perfil para ver as trilhas de aprimoramento: ",
        )? {
            Selection::Position(position) => position,
            Selection::Invalid => return Ok(Flow::Menu),
            Selection::Closed => return Ok(Flow::Exit),
        };
        let Some(profile) = self.store.get(position) else {
            return Ok(Flow::Menu);
        };

        let suggestions = self.recommender.recommend_tracks(profile);
        if suggestions.is_empty() {
            self.console.line(format!(
                "{} não possui competências com nota baixa. Parabéns!\n",
                profile.name
            ))?;
            return Ok(Flow::Menu);
        }

        self.console
            .line(format!("\nTrilhas de aprimoramento para {}:", profile.name))?;
        for suggestion in &suggestions {
            self.console.line(format!("- {}", suggestion))?;
        }
        self.console.line("")?;
        Ok(Flow::Menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::RecommendCareers));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::RecommendTracks));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("sair"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
