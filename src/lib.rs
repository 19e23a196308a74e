//! Calculatrice RPN — évaluation d’expressions arithmétiques infixes.
//!
//! Pipeline : tokenisation -> shunting-yard (RPN) -> pile d’opérandes -> `f64`.
//! Le registre des symboles (opérateurs, fonctions, constantes) pilote les
//! deux dernières étapes et peut être étendu avant la première évaluation.
//!
//! ```
//! use calculatrice_rpn::{eval_expression, Associativite, CalcError, Evaluateur, Registre};
//!
//! assert_eq!(eval_expression("2 ^ 3 ^ 2"), Ok(512.0));
//! assert!(matches!(eval_expression("foo(1)"), Err(CalcError::InvalidOperand { .. })));
//!
//! let mut registre = Registre::new();
//! registre
//!     .ajoute_operateur("%", 2, Associativite::Gauche, |a, b| a % b)
//!     .unwrap();
//! let ev = Evaluateur::avec_registre(registre);
//! assert_eq!(ev.evalue("10 % 4 * 2"), Ok(4.0));
//! ```

pub mod noyau;

pub use noyau::{
    eval_expression, Associativite, CalcError, Demarche, Evaluateur, Parentheses, Registre,
    RegistreError, Symbole,
};
