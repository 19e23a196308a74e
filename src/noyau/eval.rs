//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons (infixe) -> RPN (postfix) -> pile d’opérandes -> f64
//!
//! Chaque étape est une fonction pure : un `Evaluateur` peut traiter autant
//! d’expressions qu’on veut, y compris depuis plusieurs threads à la fois
//! (le registre n’est que lu).

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize};
use super::registre::Registre;
use super::rpn::{eval_rpn, to_rpn, Parentheses};

/// Étapes d’une évaluation, pour l’affichage diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    pub original: String,
    pub infixe: Vec<String>,
    /// `None` si la conversion a échoué (mode strict).
    pub postfixe: Option<Vec<String>>,
    pub resultat: Result<f64, CalcError>,
}

impl Demarche {
    pub fn infixe_txt(&self) -> String {
        format_tokens(&self.infixe)
    }

    pub fn postfixe_txt(&self) -> Option<String> {
        self.postfixe.as_deref().map(format_tokens)
    }
}

/// Registre (figé) + réglages de conversion.
#[derive(Debug, Default)]
pub struct Evaluateur {
    registre: Registre,
    parentheses: Parentheses,
}

impl Evaluateur {
    /// Registre par défaut, parenthèses tolérantes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Le registre est déplacé ici : plus aucun enregistrement possible ensuite.
    pub fn avec_registre(registre: Registre) -> Self {
        Self {
            registre,
            parentheses: Parentheses::default(),
        }
    }

    /// Parenthèses non appariées : erreur (`true`) ou tolérance (`false`).
    pub fn strict(mut self, strict: bool) -> Self {
        self.parentheses = if strict {
            Parentheses::Strict
        } else {
            Parentheses::Tolerant
        };
        self
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }

    pub fn parentheses(&self) -> Parentheses {
        self.parentheses
    }

    pub fn tokenize(&self, expr: &str) -> Vec<String> {
        tokenize(expr, &self.registre)
    }

    pub fn to_rpn(&self, jetons: &[String]) -> Result<Vec<String>, CalcError> {
        to_rpn(jetons, &self.registre, self.parentheses)
    }

    pub fn eval_rpn(&self, rpn: &[String]) -> Result<f64, CalcError> {
        eval_rpn(rpn, &self.registre)
    }

    /// Pipeline complet.
    pub fn evalue(&self, expr: &str) -> Result<f64, CalcError> {
        let jetons = self.tokenize(expr);
        let rpn = self.to_rpn(&jetons)?;
        self.eval_rpn(&rpn)
    }

    /// Pipeline complet, en gardant chaque étape atteinte.
    pub fn demarche(&self, expr: &str) -> Demarche {
        let infixe = self.tokenize(expr);
        log::debug!("infixe : {}", format_tokens(&infixe));

        let (postfixe, resultat) = match self.to_rpn(&infixe) {
            Ok(rpn) => {
                log::debug!("postfixe : {}", format_tokens(&rpn));
                let resultat = self.eval_rpn(&rpn);
                (Some(rpn), resultat)
            }
            Err(e) => (None, Err(e)),
        };

        match &resultat {
            Ok(v) => log::debug!("résultat : {v}"),
            Err(e) => log::debug!("échec : {e}"),
        }

        Demarche {
            original: expr.to_string(),
            infixe,
            postfixe,
            resultat,
        }
    }
}

/// API publique minimale : évalue avec le registre par défaut.
pub fn eval_expression(expr: &str) -> Result<f64, CalcError> {
    Evaluateur::new().evalue(expr)
}
