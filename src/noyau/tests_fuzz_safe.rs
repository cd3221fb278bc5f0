//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler lecture / format / aire sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (coefficients, racines)
//! - budget temps global
//! - invariants clés : aller-retour format -> lecture, valeur numérique de l’aire,
//!   symétrie en a, b, c (coefficients entiers => arithmétique exacte en f64)

use std::time::{Duration, Instant};

use super::aire::aire_surface;
use super::erreur::ErreurNoyau;
use super::format::formater_terme;
use super::lecture::lire_terme;
use super::racine::est_carre_parfait;
use super::terme::Terme;

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

/* ------------------------ Génération d’entrées (bornée) ------------------------ */

/// Racine sans carré parfait (2, 3, 5, 6, 7, 8, 10, ...).
fn gen_racine_non_carree(rng: &mut Rng) -> u128 {
    loop {
        let r = 2 + rng.pick(200) as u128;
        if !est_carre_parfait(r) {
            return r;
        }
    }
}

/// Texte d’arête à coefficient entier positif : "7", "r5", "3r12", "r16".
fn gen_arete_entiere(rng: &mut Rng) -> String {
    let k = rng.pick(50);
    match rng.pick(4) {
        0 => format!("{k}"),
        1 => format!("r{}", 1 + rng.pick(60)),
        _ => format!("{}r{}", k, 1 + rng.pick(60)),
    }
}

/// Texte quelconque : valide ou non.
fn gen_texte(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => gen_arete_entiere(rng),
        1 => format!("{},{}", rng.pick(100), rng.pick(100)),
        2 => format!("-{}.{}", rng.pick(100), rng.pick(100)),
        3 => format!("  {}  ", gen_arete_entiere(rng)),
        4 => format!("{}.5r{}", rng.pick(9), rng.pick(9)),
        5 => "abc".to_string(),
        _ => {
            let s = gen_arete_entiere(rng);
            if rng.coin() {
                format!("{s}x")
            } else {
                format!("x{s}")
            }
        }
    }
}

/// Valeur numérique d’une somme affichée "t1 + t2 + ..." (termes relisibles).
fn valeur_affichee(s: &str) -> f64 {
    s.split(" + ")
        .map(|p| {
            let t = lire_terme(p).unwrap_or_else(|e| panic!("terme illisible {p:?}: {e}"));
            t.coefficient * (t.racine as f64).sqrt()
        })
        .sum()
}

fn valeur(t: Terme) -> f64 {
    t.coefficient * (t.racine as f64).sqrt()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_aller_retour_format_lecture() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let k = rng.pick(1000) as f64;
        let r = gen_racine_non_carree(&mut rng);

        let txt = formater_terme(k, r);
        let relu = lire_terme(&txt).unwrap_or_else(|e| panic!("txt={txt:?} err={e}"));
        assert_eq!(relu, Terme::new(k, r), "txt={txt:?}");
    }
}

#[test]
fn fuzz_safe_lecture_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes textes => mêmes sorties
    let mut rng1 = Rng::new(0xBADC0DE_u64);
    let mut rng2 = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let s1 = gen_texte(&mut rng1);
        let s2 = gen_texte(&mut rng2);
        assert_eq!(s1, s2);

        match (lire_terme(&s1), lire_terme(&s2)) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a, b);
                seen_ok += 1;
            }
            (Err(ErreurNoyau::FormatInvalide(t)), Err(e2)) => {
                assert_eq!(t, s1, "l’erreur doit porter le texte reçu");
                assert_eq!(e2, ErreurNoyau::FormatInvalide(s2.clone()));
                seen_err += 1;
            }
            (a, b) => panic!("non déterministe: {s1:?} -> {a:?} / {b:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 30, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_aire_valeur_et_symetrie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (sa, sb, sc) = (
            gen_arete_entiere(&mut rng),
            gen_arete_entiere(&mut rng),
            gen_arete_entiere(&mut rng),
        );
        let a = lire_terme(&sa).unwrap();
        let b = lire_terme(&sb).unwrap();
        let c = lire_terme(&sc).unwrap();

        let aire = aire_surface(a, b, c);

        // forme : jamais ".0000", jamais de point final
        assert!(!aire.contains(".0000"), "{aire}");
        assert!(!aire.ends_with('.'), "{aire}");

        // symétrie (coefficients entiers => sommes exactes)
        assert_eq!(aire, aire_surface(b, c, a), "{sa} {sb} {sc}");
        assert_eq!(aire, aire_surface(c, b, a), "{sa} {sb} {sc}");

        // valeur numérique
        let attendu = 2.0 * (valeur(a) * valeur(b) + valeur(b) * valeur(c) + valeur(a) * valeur(c));
        let obtenu = if aire == "0" { 0.0 } else { valeur_affichee(&aire) };
        let tol = 1e-9 * attendu.abs().max(1.0);
        assert!(
            (obtenu - attendu).abs() <= tol,
            "{sa} {sb} {sc} -> {aire} ({obtenu} vs {attendu})"
        );
    }
}
