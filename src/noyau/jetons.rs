// src/noyau/jetons.rs
//
// Tokenisation : texte -> suite de jetons textuels.
// Le genre d’un jeton (nombre, opérateur, fonction…) n’est PAS stocké :
// il se décide à l’usage, par appartenance au registre.
//
// Signe unaire :
// - un '+'/'-' est collé au jeton suivant quand le jeton précédent est absent,
//   '(' ou un opérateur enregistré ("-3 + 5" -> ["-3", "+", "5"])
// - sinon c’est un opérateur binaire ordinaire
// - les signes consécutifs s’accumulent : "--3" -> ["--3"] (refusé à l’évaluation)

use super::registre::Registre;

/// Genre du dernier jeton émis : seul critère pour coller un signe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precedent {
    Aucun,
    ParOuvrante,
    Operateur,
    Autre,
}

impl Precedent {
    fn de(jeton: &str, registre: &Registre) -> Self {
        if jeton == "(" {
            Precedent::ParOuvrante
        } else if registre.est_operateur(jeton) {
            Precedent::Operateur
        } else {
            Precedent::Autre
        }
    }

    fn accepte_signe(self) -> bool {
        !matches!(self, Precedent::Autre)
    }
}

/// Découpe une expression en jetons.
///
/// N’échoue jamais : un caractère inconnu devient un jeton d’un caractère,
/// que l’évaluation rejettera ensuite comme opérande invalide.
pub fn tokenize(expr: &str, registre: &Registre) -> Vec<String> {
    let chars: Vec<char> = expr.trim().chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;
    let mut precedent = Precedent::Aucun;

    loop {
        saute_blancs(&chars, &mut i);
        if i >= chars.len() {
            break;
        }

        let mut jeton = String::new();

        if precedent.accepte_signe() {
            while i < chars.len() && matches!(chars[i], '+' | '-') {
                jeton.push(chars[i]);
                i += 1;
                saute_blancs(&chars, &mut i);
            }
        }

        // signe en toute fin d’entrée : il reste seul
        if i < chars.len() {
            jeton.push_str(&jeton_simple(&chars, &mut i, registre));
        }

        log::trace!("jeton {jeton:?}");
        precedent = Precedent::de(&jeton, registre);
        out.push(jeton);
    }

    out
}

fn saute_blancs(chars: &[char], i: &mut usize) {
    while *i < chars.len() && chars[*i].is_whitespace() {
        *i += 1;
    }
}

/// Un jeton sans signe en tête. Précondition : `*i < chars.len()`, pas sur un blanc.
fn jeton_simple(chars: &[char], i: &mut usize, registre: &Registre) -> String {
    let c = chars[*i];

    // Nombre : chiffres, '.', 'e'/'E', et signe d’exposant juste après e/E
    if c.is_ascii_digit() || c == '.' {
        let debut = *i;
        *i += 1;
        while *i < chars.len() {
            let d = chars[*i];
            let accepte = d.is_ascii_digit()
                || matches!(d, '.' | 'e' | 'E')
                || (matches!(d, '+' | '-') && matches!(chars[*i - 1], 'e' | 'E'));
            if !accepte {
                break;
            }
            *i += 1;
        }
        return chars[debut..*i].iter().collect();
    }

    // Identifiant : fonction ou constante (ou nom inconnu)
    if c.is_alphabetic() {
        let debut = *i;
        *i += 1;
        while *i < chars.len() && chars[*i].is_alphanumeric() {
            *i += 1;
        }
        return chars[debut..*i].iter().collect();
    }

    // Parenthèse, opérateur d’un caractère… ou caractère inconnu
    *i += 1;
    let s = c.to_string();
    if !matches!(c, '(' | ')') && !registre.est_operateur(&s) {
        log::debug!("tokenize : caractère inconnu {c:?} transmis tel quel");
    }
    s
}

/// Jetons séparés par une espace (affichage des étapes).
pub fn format_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
