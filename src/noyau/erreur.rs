//! Noyau — erreurs typées
//!
//! Deux familles :
//! - `CalcError`     : échec d’une évaluation (conversion ou pile d’opérandes)
//! - `RegistreError` : refus d’un enregistrement de symbole

use thiserror::Error;

/// Erreur fatale d’une évaluation. Aucun résultat numérique n’accompagne une erreur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Jeton ni symbole enregistré, ni littéral numérique.
    #[error("évaluation : opérande invalide {token:?}")]
    InvalidOperand { token: String },

    /// Pas assez d’opérandes pour `symbole`, ou pile finale ≠ 1 valeur (`symbole == None`).
    #[error("évaluation : {}", message_arite(.symbole, .attendus, .disponibles))]
    ArityError {
        symbole: Option<String>,
        attendus: usize,
        disponibles: usize,
    },

    /// Mode strict seulement : parenthèse sans partenaire (index dans la suite infixe).
    #[error("conversion : parenthèse {paren:?} non appariée (jeton n°{index})")]
    UnbalancedParen { paren: char, index: usize },
}

fn message_arite(symbole: &Option<String>, attendus: &usize, disponibles: &usize) -> String {
    match symbole {
        Some(s) => format!("{s:?} attend {attendus} opérande(s), {disponibles} disponible(s)"),
        None => format!("{disponibles} valeur(s) restante(s) sur la pile, {attendus} attendue"),
    }
}

/// Enregistrement refusé par le registre.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistreError {
    /// Le nom existe déjà (tous genres confondus : opérateur, fonction, constante).
    #[error("symbole déjà enregistré : {0:?}")]
    Doublon(String),

    /// Nom que le tokenizer ne pourrait jamais produire.
    #[error("nom de symbole invalide : {0:?}")]
    NomInvalide(String),
}
