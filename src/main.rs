// src/main.rs
//
// Calculatrice RPN — point d’entrée ligne de commande
// ---------------------------------------------------
// Usage : calculatrice_rpn [--strict] [--digits N] "<expression>"
//
// Affiche les étapes (original, infixe, postfixe, résultat).
// Erreur d’évaluation => message sur stderr + code de sortie non nul.
// Journalisation : RUST_LOG=debug (ou trace) pour suivre le pipeline.

mod app;

use std::process::ExitCode;

use clap::Parser;

use app::Args;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    app::run(&args)
}
