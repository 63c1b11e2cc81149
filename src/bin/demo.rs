// src/bin/demo.rs
//
// Démonstration console : câble les quatre opérations de base dans une
// calculatrice et évalue quatre expressions littérales.
//
//   cargo run --bin demo
//
// La division par zéro n'apparaît pas ici; pour la voir, remplacer une
// expression par "7/0" (diagnostic `log`, résultat 0).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use calculatrice_registre::noyau::operations::{
        addition, division, multiplication, soustraction,
    };
    use calculatrice_registre::noyau::Calculatrice;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut calculatrice = Calculatrice::new();
    calculatrice.ajouter('+', addition);
    calculatrice.ajouter('-', soustraction);
    calculatrice.ajouter('*', multiplication);
    calculatrice.ajouter('/', division);

    println!("Résultat de l'addition : {}", calculatrice.evaluer("22+33"));
    println!("Résultat de la soustraction : {}", calculatrice.evaluer("5-4"));
    println!(
        "Résultat de la multiplication : {}",
        calculatrice.evaluer("2*1")
    );
    println!("Résultat de la division : {}", calculatrice.evaluer("10/2"));
}

// La démo console n'a pas de sens côté web.
#[cfg(target_arch = "wasm32")]
fn main() {}
