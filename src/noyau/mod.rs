//! Noyau d’évaluation arithmétique (f64)
//!
//! Organisation interne :
//! - registre.rs : opérateurs / fonctions / constantes (précédence, associativité, rappels)
//! - jetons.rs   : tokenisation (signe unaire contextuel)
//! - rpn.rs      : shunting-yard (infixe -> RPN) + évaluation sur pile
//! - eval.rs     : pipeline complet + démarche
//! - erreur.rs   : erreurs typées

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod registre;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{CalcError, RegistreError};
pub use eval::{eval_expression, Demarche, Evaluateur};
pub use registre::{Associativite, Registre, Symbole};
pub use rpn::Parentheses;
