// src/noyau/eval.rs
//
// Évaluateur d'expressions "a op b" (deux opérandes, un opérateur).
//
// Règles de découpage (contrat historique, conservé tel quel) :
// - le PREMIER caractère hors '0'..='9' est l'opérateur;
// - ce qui précède est l'opérande 1, ce qui suit est l'opérande 2;
// - chaque opérande = "entier de tête" (la suite de chiffres initiale,
//   0 s'il n'y en a pas). "1+2+3" s'évalue donc comme 1+2.
// - pas de littéraux négatifs : un '-' de tête est lui-même pris pour
//   l'opérateur.
//
// Deux surfaces :
// - evaluer_strict : Result, distingue "pas d'opérateur" / "opérateur
//   inconnu" (les échecs ne se confondent plus avec un vrai 0);
// - evaluer        : la surface héritée, tout échec dégrade en 0.

use thiserror::Error;

use super::registre::Calculatrice;

/// Échec d'évaluation (la surface héritée `evaluer` les aplatit en 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Aucun caractère hors '0'..='9' : impossible d'identifier l'opérateur.
    #[error("aucun opérateur dans l'expression")]
    OperateurAbsent,

    /// Un opérateur a été identifié mais aucune opération ne porte ce symbole.
    #[error("opérateur inconnu : '{0}'")]
    OperateurInconnu(char),
}

/// Expression découpée : `<gauche><operateur><droite>`.
struct Decoupage<'a> {
    gauche: &'a str,
    operateur: char,
    droite: &'a str,
}

/// Cherche le premier caractère hors '0'..='9' et coupe autour.
/// `None` si l'expression ne contient que des chiffres (ou rien).
fn decouper(expression: &str) -> Option<Decoupage<'_>> {
    for (i, c) in expression.char_indices() {
        if !c.is_ascii_digit() {
            return Some(Decoupage {
                gauche: &expression[..i],
                operateur: c,
                droite: &expression[i + c.len_utf8()..],
            });
        }
    }
    None
}

/// "Entier de tête" : parse la suite de chiffres initiale, 0 sinon.
/// Accumulation saturante : une avalanche de chiffres ne panique pas.
fn entier_de_tete(s: &str) -> i64 {
    let mut valeur: i64 = 0;
    for c in s.chars() {
        match c.to_digit(10) {
            Some(d) => {
                valeur = valeur.saturating_mul(10).saturating_add(i64::from(d));
            }
            None => break,
        }
    }
    valeur
}

impl Calculatrice {
    /// Évalue `expression` et distingue les échecs du vrai zéro.
    pub fn evaluer_strict(&self, expression: &str) -> Result<i64, ErreurEval> {
        let Some(d) = decouper(expression) else {
            // Pas d'opérateur identifiable : on ne consulte pas le registre
            // (un symbole '\0' enregistré ne capte donc jamais ce cas).
            return Err(ErreurEval::OperateurAbsent);
        };

        let Some(fonction) = self.chercher(d.operateur) else {
            return Err(ErreurEval::OperateurInconnu(d.operateur));
        };

        let a = entier_de_tete(d.gauche);
        let b = entier_de_tete(d.droite);
        Ok(fonction(a, b))
    }

    /// Surface héritée : tout échec devient 0 (indiscernable d'un vrai 0).
    pub fn evaluer(&self, expression: &str) -> i64 {
        self.evaluer_strict(expression).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::operations::{addition, division, multiplication, soustraction};
    use super::{Calculatrice, ErreurEval};

    /// Registre complet `+ - * /` sur les quatre opérations de base.
    fn calc_complete() -> Calculatrice {
        let mut calc = Calculatrice::new();
        assert!(calc.ajouter('+', addition));
        assert!(calc.ajouter('-', soustraction));
        assert!(calc.ajouter('*', multiplication));
        assert!(calc.ajouter('/', division));
        calc
    }

    // --- Aller-retours littéraux ---

    #[test]
    fn quatre_operations_de_base() {
        let calc = calc_complete();
        assert_eq!(calc.evaluer("22+33"), 55);
        assert_eq!(calc.evaluer("5-4"), 1);
        assert_eq!(calc.evaluer("2*1"), 2);
        assert_eq!(calc.evaluer("10/2"), 5);
    }

    #[test]
    fn division_par_zero_rend_zero() {
        let calc = calc_complete();
        // Le diagnostic part dans `log`, pas dans la valeur de retour.
        assert_eq!(calc.evaluer("7/0"), 0);
        assert_eq!(calc.evaluer_strict("7/0"), Ok(0));
    }

    #[test]
    fn registre_vide_rend_zero() {
        let calc = Calculatrice::new();
        assert_eq!(calc.evaluer("3+4"), 0);
        assert_eq!(
            calc.evaluer_strict("3+4"),
            Err(ErreurEval::OperateurInconnu('+'))
        );
    }

    // --- Règle du premier non-chiffre ---

    #[test]
    fn deuxieme_operateur_tronque() {
        // "1+2+3" : l'opérande 2 se lit dans "2+3" et s'arrête au '+'.
        let calc = calc_complete();
        assert_eq!(calc.evaluer("1+2+3"), 3);
    }

    #[test]
    fn moins_de_tete_est_l_operateur() {
        // "-5+3" : opérateur '-', gauche "" => 0, droite "5+3" => 5.
        let calc = calc_complete();
        assert_eq!(calc.evaluer("-5+3"), -5);
    }

    #[test]
    fn que_des_chiffres_pas_d_operateur() {
        let calc = calc_complete();
        assert_eq!(calc.evaluer("1234"), 0);
        assert_eq!(
            calc.evaluer_strict("1234"),
            Err(ErreurEval::OperateurAbsent)
        );
    }

    #[test]
    fn expression_vide() {
        let calc = calc_complete();
        assert_eq!(calc.evaluer(""), 0);
        assert_eq!(calc.evaluer_strict(""), Err(ErreurEval::OperateurAbsent));
    }

    #[test]
    fn operandes_manquants_valent_zero() {
        let calc = calc_complete();
        assert_eq!(calc.evaluer("+5"), 5); // gauche vide => 0
        assert_eq!(calc.evaluer("5+"), 5); // droite vide => 0
        assert_eq!(calc.evaluer("+"), 0);
    }

    // --- Symboles au-delà de + - * / ---

    #[test]
    fn operateur_lettre() {
        let mut calc = Calculatrice::new();
        assert!(calc.ajouter('x', |a, b| a * b));
        assert_eq!(calc.evaluer("3x4"), 12);
    }

    #[test]
    fn operateur_multi_octets() {
        // Un symbole hors ASCII reste un `char` comme un autre.
        let mut calc = Calculatrice::new();
        assert!(calc.ajouter('×', |a, b| a * b));
        assert_eq!(calc.evaluer("6×7"), 42);
    }

    #[test]
    fn operateur_espace() {
        // Aucune tolérance aux espaces : ' ' n'est un opérateur que si
        // quelqu'un l'enregistre.
        let calc = calc_complete();
        assert_eq!(calc.evaluer("2 +3"), 0);

        let mut calc2 = Calculatrice::new();
        assert!(calc2.ajouter(' ', |a, b| a + b));
        assert_eq!(calc2.evaluer("2 3"), 5);
    }

    // --- Garde-fous ---

    #[test]
    fn avalanche_de_chiffres_sature() {
        let mut calc = Calculatrice::new();
        assert!(calc.ajouter('#', |a, _b| a));
        assert_eq!(calc.evaluer("99999999999999999999999999#1"), i64::MAX);
    }

    #[test]
    fn evaluation_repetee_identique() {
        let calc = calc_complete();
        let premier = calc.evaluer("22+33");
        for _ in 0..10 {
            assert_eq!(calc.evaluer("22+33"), premier);
        }
    }

    #[test]
    fn strict_et_herite_coherents() {
        let calc = calc_complete();
        for expr in ["22+33", "7/0", "1234", "9?9", ""] {
            assert_eq!(calc.evaluer(expr), calc.evaluer_strict(expr).unwrap_or(0));
        }
    }
}
