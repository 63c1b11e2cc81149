//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le découpage et le dispatch sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariant clé : evaluer(e) == evaluer_strict(e).unwrap_or(0)
//! - les erreurs strictes doivent rester cohérentes avec le contenu
//!   de l'expression (OperateurAbsent ssi que des chiffres)

use std::time::{Duration, Instant};

use super::eval::ErreurEval;
use super::operations::{addition, division, multiplication, soustraction};
use super::registre::Calculatrice;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn calc_complete() -> Calculatrice {
    let mut calc = Calculatrice::new();
    calc.ajouter('+', addition);
    calc.ajouter('-', soustraction);
    calc.ajouter('*', multiplication);
    calc.ajouter('/', division);
    calc
}

/// Suite de chiffres de longueur 0..=4 (0 => opérande implicite = 0).
fn gen_chiffres(rng: &mut Rng) -> String {
    let longueur = rng.pick(5) as usize;
    let mut s = String::new();
    for _ in 0..longueur {
        let d = rng.pick(10);
        s.push(char::from(b'0' + d as u8));
    }
    s
}

/// Symbole : moitié du temps un opérateur enregistré, sinon du bruit.
fn gen_symbole(rng: &mut Rng) -> char {
    const ENREGISTRES: [char; 4] = ['+', '-', '*', '/'];
    const BRUIT: [char; 8] = ['?', '!', 'a', 'z', ' ', '%', '=', '×'];

    if rng.coin() {
        ENREGISTRES[rng.pick(4) as usize]
    } else {
        BRUIT[rng.pick(8) as usize]
    }
}

/// Expression "a op b" (ou salade plus libre un coup sur quatre).
fn gen_expression(rng: &mut Rng) -> String {
    if rng.pick(4) == 0 {
        // salade : chiffres et symboles mélangés
        let mut s = String::new();
        for _ in 0..rng.pick(10) {
            if rng.coin() {
                s.push_str(&gen_chiffres(rng));
            } else {
                s.push(gen_symbole(rng));
            }
        }
        s
    } else {
        format!("{}{}{}", gen_chiffres(rng), gen_symbole(rng), gen_chiffres(rng))
    }
}

/// L'erreur stricte doit coller au contenu de l'expression.
fn check_erreur_coherente(calc: &Calculatrice, expr: &str, e: ErreurEval) {
    match e {
        ErreurEval::OperateurAbsent => {
            assert!(
                expr.chars().all(|c| c.is_ascii_digit()),
                "OperateurAbsent sur {expr:?} qui contient un non-chiffre"
            );
        }
        ErreurEval::OperateurInconnu(sym) => {
            let premier = expr.chars().find(|c| !c.is_ascii_digit());
            assert_eq!(premier, Some(sym), "expr={expr:?}");
            assert_eq!(
                calc.evaluer(&format!("1{sym}1")),
                0,
                "symbole {sym:?} censé être inconnu"
            );
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariant_herite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);
    let calc = calc_complete();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_expression(&mut rng);

        // Invariant : la surface héritée aplatit exactement le strict.
        let strict = calc.evaluer_strict(&expr);
        assert_eq!(calc.evaluer(&expr), strict.unwrap_or(0), "expr={expr:?}");

        // Déterminisme : rejouer la même expression redonne pareil.
        assert_eq!(calc.evaluer_strict(&expr), strict, "expr={expr:?}");

        match strict {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                check_erreur_coherente(&calc, &expr, e);
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 50, "trop peu d'erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_formes_bien_construites() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let calc = calc_complete();

    for _ in 0..300 {
        budget(t0, max);

        // a et b bornés, opérateur garanti enregistré : succès obligatoire.
        let a = rng.pick(1000) as i64;
        let b = rng.pick(1000) as i64;
        let (sym, attendu) = match rng.pick(4) {
            0 => ('+', a + b),
            1 => ('-', a - b),
            2 => ('*', a * b),
            _ => ('/', if b == 0 { 0 } else { a / b }),
        };

        let expr = format!("{a}{sym}{b}");
        assert_eq!(calc.evaluer_strict(&expr), Ok(attendu), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_entree_longue_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let calc = calc_complete();

    // Très longue suite de chiffres : saturation, pas de panique.
    let gauche = "9".repeat(4096);
    let expr = format!("{gauche}+1");
    budget(t0, max);

    assert_eq!(calc.evaluer_strict(&expr), Ok(i64::MAX.wrapping_add(1)));

    // Et une salade longue de symboles inconnus.
    let salade: String = std::iter::repeat("7?").take(2048).collect();
    budget(t0, max);
    assert_eq!(calc.evaluer(&salade), 0);
}
