//! src/app/etat.rs
//!
//! Réglages de la ligne de commande (sans affichage, sans parsing d’arguments).
//!
//! Contrats :
//! - Aucune évaluation ici : on prépare seulement l’`Evaluateur`.
//! - Défense en profondeur : bornes sur les décimales affichées.

use calculatrice_rpn::Evaluateur;

/// Au-delà, un f64 n’a plus de chiffres significatifs à montrer.
const DIGITS_MAX: usize = 17;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    /// Parenthèses non appariées => erreur de conversion.
    pub strict: bool,
    // None : affichage f64 natif (le plus court qui relit la même valeur)
    digits: Option<usize>,
}

impl Reglages {
    pub fn new(strict: bool, digits: Option<usize>) -> Self {
        Self {
            strict,
            digits: digits.map(|d| d.min(DIGITS_MAX)),
        }
    }

    pub fn digits(&self) -> Option<usize> {
        self.digits
    }

    /// Registre par défaut, mode de parenthèses selon `strict`.
    pub fn evaluateur(&self) -> Evaluateur {
        Evaluateur::new().strict(self.strict)
    }
}
