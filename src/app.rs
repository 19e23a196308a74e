// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Arguments de la ligne de commande (clap)
// - Enchaîner : réglages -> démarche du noyau -> affichage -> code de sortie

pub mod etat;
pub mod vue;

use std::process::ExitCode;

use clap::Parser as ClapParser;

use etat::Reglages;

/// Évalue une expression arithmétique infixe et affiche chaque étape.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Expression à évaluer, entre guillemets (ex: "3 + 4 * 2")
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Refuse les parenthèses non appariées au lieu de les ignorer
    #[arg(long)]
    pub strict: bool,

    /// Nombre de décimales affichées pour le résultat (17 au plus)
    #[arg(short, long)]
    pub digits: Option<usize>,
}

pub fn run(args: &Args) -> ExitCode {
    let reglages = Reglages::new(args.strict, args.digits);
    log::debug!("réglages : {reglages:?}");

    let demarche = reglages.evaluateur().demarche(&args.expression);
    print!("{}", vue::etapes(&demarche, reglages.digits()));

    match &demarche.resultat {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", vue::erreur(e));
            ExitCode::FAILURE
        }
    }
}
