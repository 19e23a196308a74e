//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier le pipeline de bout en bout sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (longueur, profondeur de parenthèses)
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - Division par zéro, log d’un non-positif… ne sont PAS des erreurs :
//!   la sémantique IEEE-754 (inf / NaN) passe telle quelle.
//! - Le signe unaire se colle au jeton suivant : "-pi" ou "-(…)" ne sont pas
//!   des opérandes ; on écrit "0 - pi" ou "-1 * (…)".
//! - Aucune récursion dans le pipeline : la profondeur des parenthèses n’est
//!   bornée que par la mémoire.

use std::time::{Duration, Instant};

use super::eval::{eval_expression, Evaluateur};
use super::CalcError;

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    let tol = 1e-9 * attendu.abs().max(1.0);
    assert!(
        (v - attendu).abs() <= tol,
        "expr={expr:?} : obtenu {v}, attendu {attendu}"
    );
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle manuel (précédence standard) ------------------------ */

#[test]
fn sci_table_oracle_manuel() {
    use std::f64::consts::{E, PI};

    let cas: &[(&str, f64)] = &[
        ("1 + 2 * 3 - 4 / 2", 1.0 + 2.0 * 3.0 - 4.0 / 2.0),
        ("2 * (3 + 4) ^ 2 / 7", 2.0 * 49.0 / 7.0),
        ("(1 + 2) * (3 + 4) * (5 - 6)", -21.0),
        ("100 / 10 / 5", 2.0),
        ("2 ^ 2 ^ 3", 256.0),
        ("(2 ^ 2) ^ 3", 64.0),
        ("-2 ^ 2", 4.0), // "-2" est un littéral
        ("3 - 4 + 5 - 6", -2.0),
        ("2 * pi * 3", 2.0 * PI * 3.0),
        ("e ^ 2", E * E),
        ("exp(ln(5))", 5.0),
        ("sin(pi / 6) * 2", 1.0),
        ("cos(0) + sin(0) + tan(0)", 1.0),
        ("abs(3 - 10) + abs(-1.5)", 8.5),
        ("log(1e3) - log(10)", 2.0),
        ("1.5e2 + 2.5E-1", 150.25),
        ("((((1 + 1))))", 2.0),
        ("sin(pi / 2) ^ 2 + cos(pi / 2) ^ 2", 1.0),
    ];

    for (expr, attendu) in cas {
        assert_proche(expr, *attendu);
    }
}

/* ------------------------ IEEE-754 : pas d’erreur, propagation ------------------------ */

#[test]
fn sci_ieee_infinis() {
    assert_eq!(eval_ok("1 / 0"), f64::INFINITY);
    assert_eq!(eval_ok("-1 / 0"), f64::NEG_INFINITY);
    assert_eq!(eval_ok("log(0)"), f64::NEG_INFINITY);
    assert_eq!(eval_ok("ln(0)"), f64::NEG_INFINITY);
    assert_eq!(eval_ok("exp(1000)"), f64::INFINITY);
}

#[test]
fn sci_ieee_nan() {
    assert!(eval_ok("0 / 0").is_nan());
    assert!(eval_ok("ln(-1)").is_nan());
    assert!(eval_ok("log(-10)").is_nan());
    assert!(eval_ok("(-8) ^ (1 / 3)").is_nan());
    // NaN contamine le reste du calcul
    assert!(eval_ok("1 + 0 / 0 * 2").is_nan());
}

/* ------------------------ Cas limites du tokenizer ------------------------ */

#[test]
fn sci_signes_limites() {
    assert_eq!(eval_ok("+5"), 5.0);
    assert_eq!(eval_ok("(+5) - (-5)"), 10.0);
    assert_eq!(eval_ok("0 - pi"), -std::f64::consts::PI);

    // signe collé à un nom : l’opérande "-pi" n’existe pas
    assert_eq!(
        eval_expression("2 * -pi"),
        Err(CalcError::InvalidOperand {
            token: "-pi".into()
        })
    );
    // signe sans opérande en fin d’entrée : "-" redevient un opérateur sans arguments
    assert!(matches!(
        eval_expression("3 + -"),
        Err(CalcError::ArityError { .. })
    ));
}

#[test]
fn sci_caractere_inconnu_rapporte() {
    assert_eq!(
        eval_expression("2 # 3"),
        Err(CalcError::InvalidOperand { token: "#".into() })
    );
}

/* ------------------------ Isolation : un registre, plusieurs évaluations ------------------------ */

#[test]
fn sci_evaluations_independantes_sequentielles() {
    let ev = Evaluateur::new();

    // une erreur ne laisse aucun état derrière elle
    assert!(ev.evalue("1 2 3").is_err());
    assert!(ev.evalue("foo + 1").is_err());
    assert_eq!(ev.evalue("1 + 1"), Ok(2.0));

    // même expression, même résultat
    let a = ev.evalue("2 ^ 3 ^ 2");
    let b = ev.evalue("2 ^ 3 ^ 2");
    assert_eq!(a, b);
    assert_eq!(a, Ok(512.0));
}

#[test]
fn sci_evaluations_independantes_concurrentes() {
    let ev = Evaluateur::new();
    let cas: Vec<(String, f64)> = (0..16)
        .map(|k| {
            let x = k as f64;
            (format!("{k} * 2 + (10 - {k}) / 2"), x * 2.0 + (10.0 - x) / 2.0)
        })
        .collect();

    std::thread::scope(|s| {
        for (expr, attendu) in &cas {
            let ev = &ev;
            s.spawn(move || {
                for _ in 0..200 {
                    assert_eq!(ev.evalue(expr), Ok(*attendu), "expr={expr:?}");
                }
            });
        }
    });
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for n in [10usize, 100, 1_000, 5_000] {
        let expr = vec!["1"; n].join(" + ");
        assert_eq!(eval_ok(&expr), n as f64, "n={n}");
        budget(t0, max);
    }
}

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for prof in [1usize, 10, 100, 2_000] {
        let expr = format!("{}1 + 1{}", "(".repeat(prof), ")".repeat(prof));
        assert_eq!(eval_ok(&expr), 2.0, "prof={prof}");

        // idem en mode strict : tout est apparié
        let strict = Evaluateur::new().strict(true);
        assert_eq!(strict.evalue(&expr), Ok(2.0));
        budget(t0, max);
    }
}

#[test]
fn sci_stress_chaine_puissances() {
    let t0 = Instant::now();
    // 1 ^ 1 ^ … ^ 1 : associatif à droite, pile d’opérateurs profonde
    let expr = vec!["1"; 3_000].join(" ^ ");
    assert_eq!(eval_ok(&expr), 1.0);
    // à droite : 2 ^ (3 ^ (1 ^ … ^ (1 ^ 0))) = 8 ; à gauche ce serait 1
    let expr = format!("2 ^ 3 ^ {} ^ 0", vec!["1"; 500].join(" ^ "));
    assert_eq!(eval_ok(&expr), 8.0);
    budget(t0, Duration::from_secs(5));
}

#[test]
fn sci_stress_fonctions_imbriquees() {
    let t0 = Instant::now();
    let prof = 1_000;
    let expr = format!("{}0{}", "abs(".repeat(prof), ")".repeat(prof));
    assert_eq!(eval_ok(&expr), 0.0);
    let expr = format!("{}1{}", "exp(ln(".repeat(50), "))".repeat(50));
    assert_proche(&expr, 1.0);
    budget(t0, Duration::from_secs(5));
}
