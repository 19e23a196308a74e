// src/app/vue.rs
//
// Vue (texte) — rendu des étapes d’une démarche
// ---------------------------------------------
// Format (une étape par ligne, s’arrête à la dernière étape atteinte) :
//   * Original : <texte>
//     Infixe   : <jetons>
//     Postfixe : <jetons>
//     Résultat : <valeur>
//
// L’erreur n’est pas rendue ici avec les étapes : elle part sur stderr.

use std::fmt::Write;

use calculatrice_rpn::{CalcError, Demarche};

/// Étapes atteintes, prêtes à imprimer sur stdout.
pub fn etapes(d: &Demarche, digits: Option<usize>) -> String {
    let mut out = String::new();

    // écrire dans une String n’échoue pas
    let _ = writeln!(out, "* Original : {}", d.original);
    let _ = writeln!(out, "  Infixe   : {}", d.infixe_txt());
    if let Some(p) = d.postfixe_txt() {
        let _ = writeln!(out, "  Postfixe : {p}");
    }
    if let Ok(v) = &d.resultat {
        let _ = writeln!(out, "  Résultat : {}", format_resultat(*v, digits));
    }
    out
}

pub fn format_resultat(v: f64, digits: Option<usize>) -> String {
    match digits {
        Some(n) => format!("{v:.n$}"),
        None => format!("{v}"),
    }
}

pub fn erreur(e: &CalcError) -> String {
    format!("Erreur : {e}")
}
