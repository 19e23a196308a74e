// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de jetons infixes en RPN (postfix), guidé par le registre
// - Puis évaluer la RPN sur une pile de f64
//
// Règles de conversion:
// - '(' : empilé
// - ')' : dépile vers la sortie jusqu’à '(' (jetée) ; ')' orpheline ignorée (mode tolérant)
// - opérateur t : dépile tant que le sommet est une fonction, ou un opérateur
//   de précédence plus forte, ou égale si t est associatif à gauche ; puis empile t
// - fonction : empilée (elle sortira au premier dépilement qui la rencontre)
// - tout le reste (nombre, constante, inconnu) : sortie directe
//
// NOTE:
// - Les deux étapes sont des fonctions pures : rien n’est consommé,
//   la même suite peut être convertie ou évaluée plusieurs fois.

use super::erreur::CalcError;
use super::registre::{Associativite, Registre, Symbole};

/// Traitement des parenthèses non appariées.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parentheses {
    /// ')' orpheline et '(' restantes sont ignorées silencieusement.
    #[default]
    Tolerant,
    /// Toute parenthèse non appariée est une erreur de conversion.
    Strict,
}

/// Faut-il sortir `sommet` avant d’empiler un opérateur (precedence, assoc) ?
fn doit_pop(sommet: &str, precedence: i32, assoc: Associativite, registre: &Registre) -> bool {
    match registre.cherche(sommet) {
        Some(Symbole::Fonction { .. }) => true,
        Some(Symbole::Operateur {
            precedence: p_top, ..
        }) => match assoc {
            Associativite::Gauche => *p_top >= precedence,
            Associativite::Droite => *p_top > precedence,
        },
        // '(' : barrière
        _ => false,
    }
}

/// Convertit une suite de jetons infixes en RPN.
///
/// Exemple:
///   infixe:  ["3", "+", "4", "*", "2"]
///   rpn:     ["3", "4", "2", "*", "+"]
pub fn to_rpn(
    jetons: &[String],
    registre: &Registre,
    parentheses: Parentheses,
) -> Result<Vec<String>, CalcError> {
    let mut out: Vec<String> = Vec::with_capacity(jetons.len());
    // (jeton, index dans l’infixe) : l’index sert au rapport d’erreur strict
    let mut ops: Vec<(&str, usize)> = Vec::new();

    for (index, jeton) in jetons.iter().enumerate() {
        let jeton = jeton.as_str();

        if jeton == "(" {
            ops.push((jeton, index));
            continue;
        }

        if jeton == ")" {
            let mut ouverte = false;
            while let Some((top, _)) = ops.pop() {
                if top == "(" {
                    ouverte = true;
                    break;
                }
                out.push(top.to_string());
            }
            if !ouverte {
                if parentheses == Parentheses::Strict {
                    return Err(CalcError::UnbalancedParen { paren: ')', index });
                }
                log::debug!("to_rpn : ')' orpheline (jeton n°{index}) ignorée");
            }
            continue;
        }

        match registre.cherche(jeton) {
            Some(Symbole::Operateur {
                precedence, assoc, ..
            }) => {
                while let Some(&(top, _)) = ops.last() {
                    if !doit_pop(top, *precedence, *assoc, registre) {
                        break;
                    }
                    ops.pop();
                    out.push(top.to_string());
                }
                ops.push((jeton, index));
            }
            Some(Symbole::Fonction { .. }) => ops.push((jeton, index)),
            _ => out.push(jeton.to_string()),
        }

        log::trace!("to_rpn : {jeton:?} -> sortie={out:?}");
    }

    // vide la pile ops
    while let Some((op, index)) = ops.pop() {
        if op == "(" {
            if parentheses == Parentheses::Strict {
                return Err(CalcError::UnbalancedParen { paren: '(', index });
            }
            log::debug!("to_rpn : '(' non fermée (jeton n°{index}) ignorée");
            continue;
        }
        out.push(op.to_string());
    }

    Ok(out)
}

/// Retire les `arite` derniers opérandes (ordre d’empilement conservé : [gauche, droite]).
fn depile(pile: &mut Vec<f64>, symbole: &str, arite: usize) -> Result<Vec<f64>, CalcError> {
    if pile.len() < arite {
        return Err(CalcError::ArityError {
            symbole: Some(symbole.to_string()),
            attendus: arite,
            disponibles: pile.len(),
        });
    }
    Ok(pile.split_off(pile.len() - arite))
}

/// Littéral numérique : signes éventuels, puis chiffre ou '.' obligatoire.
/// Écarte "inf"/"nan" que `f64::from_str` accepterait.
fn litteral(jeton: &str) -> Result<f64, CalcError> {
    let corps = jeton.trim_start_matches(['+', '-']);
    let commence_bien = corps.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    match jeton.parse::<f64>() {
        Ok(v) if commence_bien => Ok(v),
        _ => Err(CalcError::InvalidOperand {
            token: jeton.to_string(),
        }),
    }
}

/// Évalue une RPN.
///
/// - opérateur : b = 1er dépilé (droite), a = 2e dépilé (gauche), push a ∘ b
/// - fonction  : push f(x)
/// - constante : push valeur
/// - sinon     : littéral f64, ou `InvalidOperand`
///
/// La pile finale doit contenir exactement une valeur (`ArityError` sinon).
pub fn eval_rpn(rpn: &[String], registre: &Registre) -> Result<f64, CalcError> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match registre.cherche(jeton) {
            Some(Symbole::Operateur { eval, .. }) => {
                let ab = depile(&mut pile, jeton, 2)?;
                pile.push(eval(ab[0], ab[1]));
            }
            Some(Symbole::Fonction { eval, .. }) => {
                let x = depile(&mut pile, jeton, 1)?;
                pile.push(eval(x[0]));
            }
            Some(Symbole::Constante { eval }) => pile.push(eval()),
            None => pile.push(litteral(jeton)?),
        }

        log::trace!("eval_rpn : {jeton:?} -> pile={pile:?}");
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(CalcError::ArityError {
            symbole: None,
            attendus: 1,
            disponibles: pile.len(),
        }),
    }
}
