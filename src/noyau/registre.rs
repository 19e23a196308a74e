//! Noyau — registre des symboles
//!
//! Une seule table ordonnée nom -> symbole (opérateur, fonction, constante).
//! Conséquence : un nom ne peut pas exister sous deux genres à la fois.
//!
//! Le registre est construit puis figé : le convertisseur et l’évaluateur
//! ne font que des lectures (`cherche`), donc un registre se partage sans verrou.

use std::fmt;

use indexmap::{map::Entry, IndexMap};

use super::erreur::RegistreError;

pub type FnBinaire = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;
pub type FnUnaire = Box<dyn Fn(f64) -> f64 + Send + Sync>;
pub type FnConstante = Box<dyn Fn() -> f64 + Send + Sync>;

/// Précédence des fonctions par défaut (au-dessus de tous les opérateurs).
pub const PRECEDENCE_FONCTION: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Définition d’un symbole, avec son rappel d’évaluation.
pub enum Symbole {
    /// Opérateur binaire infixe.
    Operateur {
        precedence: i32,
        assoc: Associativite,
        eval: FnBinaire,
    },
    /// Fonction unaire, appelée par `nom(x)`.
    Fonction { precedence: i32, eval: FnUnaire },
    /// Valeur nommée, fixe pour toute la vie du registre.
    Constante { eval: FnConstante },
}

impl Symbole {
    pub fn operateur(
        precedence: i32,
        assoc: Associativite,
        f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Symbole::Operateur {
            precedence,
            assoc,
            eval: Box::new(f),
        }
    }

    pub fn fonction(precedence: i32, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Symbole::Fonction {
            precedence,
            eval: Box::new(f),
        }
    }

    pub fn constante(valeur: f64) -> Self {
        Symbole::Constante {
            eval: Box::new(move || valeur),
        }
    }

    /// Nombre d’opérandes consommés sur la pile.
    pub fn arite(&self) -> usize {
        match self {
            Symbole::Operateur { .. } => 2,
            Symbole::Fonction { .. } => 1,
            Symbole::Constante { .. } => 0,
        }
    }

    pub fn precedence(&self) -> Option<i32> {
        match self {
            Symbole::Operateur { precedence, .. } | Symbole::Fonction { precedence, .. } => {
                Some(*precedence)
            }
            Symbole::Constante { .. } => None,
        }
    }

    fn genre(&self) -> &'static str {
        match self {
            Symbole::Operateur { .. } => "opérateur",
            Symbole::Fonction { .. } => "fonction",
            Symbole::Constante { .. } => "constante",
        }
    }
}

impl fmt::Debug for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbole::Operateur {
                precedence, assoc, ..
            } => f
                .debug_struct("Operateur")
                .field("precedence", precedence)
                .field("assoc", assoc)
                .finish_non_exhaustive(),
            Symbole::Fonction { precedence, .. } => f
                .debug_struct("Fonction")
                .field("precedence", precedence)
                .finish_non_exhaustive(),
            Symbole::Constante { eval } => {
                f.debug_struct("Constante").field("valeur", &eval()).finish()
            }
        }
    }
}

pub struct Registre {
    symboles: IndexMap<String, Symbole>,
}

impl Registre {
    /// Registre sans aucun symbole (pour un jeu de symboles entièrement personnalisé).
    pub fn vide() -> Self {
        Self {
            symboles: IndexMap::new(),
        }
    }

    /// Registre par défaut : + - * / ^, abs sin cos tan log ln exp, pi e.
    pub fn new() -> Self {
        use Associativite::{Droite, Gauche};

        let mut r = Self::vide();

        // insertion directe : noms valides et distincts
        let defauts = [
            ("+", Symbole::operateur(1, Gauche, |a, b| a + b)),
            ("-", Symbole::operateur(1, Gauche, |a, b| a - b)),
            ("*", Symbole::operateur(2, Gauche, |a, b| a * b)),
            ("/", Symbole::operateur(2, Gauche, |a, b| a / b)),
            // seul opérateur associatif à droite
            ("^", Symbole::operateur(3, Droite, f64::powf)),
            ("pi", Symbole::constante(std::f64::consts::PI)),
            ("e", Symbole::constante(std::f64::consts::E)),
            ("abs", Symbole::fonction(PRECEDENCE_FONCTION, f64::abs)),
            ("sin", Symbole::fonction(PRECEDENCE_FONCTION, f64::sin)),
            ("cos", Symbole::fonction(PRECEDENCE_FONCTION, f64::cos)),
            ("tan", Symbole::fonction(PRECEDENCE_FONCTION, f64::tan)),
            ("log", Symbole::fonction(PRECEDENCE_FONCTION, f64::log10)),
            ("ln", Symbole::fonction(PRECEDENCE_FONCTION, f64::ln)),
            ("exp", Symbole::fonction(PRECEDENCE_FONCTION, f64::exp)),
        ];
        for (nom, symbole) in defauts {
            r.symboles.insert(nom.to_string(), symbole);
        }
        r
    }

    /// Ajoute un symbole. Refuse les doublons (tous genres) et les noms non lexables.
    pub fn enregistre(
        &mut self,
        nom: impl Into<String>,
        symbole: Symbole,
    ) -> Result<(), RegistreError> {
        let nom = nom.into();

        let nom_ok = match symbole {
            Symbole::Operateur { .. } => est_nom_operateur(&nom),
            Symbole::Fonction { .. } | Symbole::Constante { .. } => est_identifiant(&nom),
        };
        if !nom_ok {
            return Err(RegistreError::NomInvalide(nom));
        }

        match self.symboles.entry(nom) {
            Entry::Occupied(o) => Err(RegistreError::Doublon(o.key().clone())),
            Entry::Vacant(v) => {
                log::debug!("registre : {} {:?} ajouté", symbole.genre(), v.key());
                v.insert(symbole);
                Ok(())
            }
        }
    }

    pub fn ajoute_operateur(
        &mut self,
        nom: impl Into<String>,
        precedence: i32,
        assoc: Associativite,
        f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Result<(), RegistreError> {
        self.enregistre(nom, Symbole::operateur(precedence, assoc, f))
    }

    pub fn ajoute_fonction(
        &mut self,
        nom: impl Into<String>,
        precedence: i32,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Result<(), RegistreError> {
        self.enregistre(nom, Symbole::fonction(precedence, f))
    }

    pub fn ajoute_constante(
        &mut self,
        nom: impl Into<String>,
        valeur: f64,
    ) -> Result<(), RegistreError> {
        self.enregistre(nom, Symbole::constante(valeur))
    }

    /// Recherche par nom ; `None` = symbole inconnu.
    pub fn cherche(&self, nom: &str) -> Option<&Symbole> {
        self.symboles.get(nom)
    }

    pub fn est_operateur(&self, nom: &str) -> bool {
        matches!(self.cherche(nom), Some(Symbole::Operateur { .. }))
    }

    pub fn est_fonction(&self, nom: &str) -> bool {
        matches!(self.cherche(nom), Some(Symbole::Fonction { .. }))
    }

    pub fn est_constante(&self, nom: &str) -> bool {
        matches!(self.cherche(nom), Some(Symbole::Constante { .. }))
    }

    /// Noms dans l’ordre d’enregistrement.
    pub fn noms(&self) -> impl Iterator<Item = &str> {
        self.symboles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symboles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symboles.is_empty()
    }
}

impl Default for Registre {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.symboles.iter()).finish()
    }
}

/// Un seul caractère, qui ne peut pas commencer un autre jeton.
fn est_nom_operateur(nom: &str) -> bool {
    let mut it = nom.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => {
            !c.is_alphanumeric() && !c.is_whitespace() && !matches!(c, '(' | ')' | '.')
        }
        _ => false,
    }
}

/// Lettre, puis lettres/chiffres (même règle que le tokenizer).
fn est_identifiant(nom: &str) -> bool {
    let mut it = nom.chars();
    match it.next() {
        Some(c) if c.is_alphabetic() => it.all(char::is_alphanumeric),
        _ => false,
    }
}
