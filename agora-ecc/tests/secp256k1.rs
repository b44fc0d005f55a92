use agora_ecc::arithmetic::{FieldElement, Point};
use agora_ecc::secp256k1::{S256Field, S256Point, G, GX, GY};
use agora_ecc::{ArithmeticError, BigUint};

use rand::Rng;

fn order() -> BigUint {
    BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .unwrap()
}

fn random_scalar<R: Rng>(rng: &mut R, bytes: usize) -> BigUint {
    let raw: Vec<u8> = (0..bytes).map(|_| rng.gen()).collect();
    BigUint::from_bytes_be(&raw)
}

#[test]
fn runtime_field_over_secp256k1_prime() {
    let prime = S256Field::prime();
    let gx = S256Field::new(GX).unwrap().to_biguint();
    let gy = S256Field::new(GY).unwrap().to_biguint();
    let x = FieldElement::new(gx, prime.clone()).unwrap();
    let y = FieldElement::new(gy, prime.clone()).unwrap();
    let zero = FieldElement::new(0, prime.clone()).unwrap();
    let seven = FieldElement::new(7, prime).unwrap();

    let runtime_g = Point::from_coordinates(x.clone(), y.clone(), zero, seven).unwrap();
    let typed_g: Point<S256Field> = G.into();

    let doubled = runtime_g.double().unwrap();
    let typed_doubled = typed_g.double().unwrap();
    assert_eq!(
        doubled.x().cloned(),
        typed_doubled.x().map(|x| FieldElement::from(*x))
    );
    assert_eq!(
        doubled.y().cloned(),
        typed_doubled.y().map(|y| FieldElement::from(*y))
    );

    let typed_x = S256Field::try_from(x).unwrap();
    let typed_y = S256Field::try_from(y).unwrap();
    assert_eq!(S256Point::new(typed_x, typed_y).unwrap(), G);
}

#[test]
fn scalar_multiplication_is_linear() {
    let mut rng = rand::thread_rng();
    let a = random_scalar(&mut rng, 8);
    let b = random_scalar(&mut rng, 8);

    let lhs = G.scalar_mul(&(&a + &b)).unwrap();
    let rhs = G
        .scalar_mul(&a)
        .and_then(|a_g| a_g.checked_add(&G.scalar_mul(&b)?))
        .unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn coefficients_are_reduced_by_the_order() {
    let mut rng = rand::thread_rng();
    let order = order();
    let k = random_scalar(&mut rng, 40);

    assert_eq!(
        G.scalar_mul(&k).unwrap(),
        G.scalar_mul(&(&k % &order)).unwrap()
    );
}

#[test]
fn point_addition_commutes() {
    let g2 = G.double().unwrap();
    let g5 = G.scalar_mul(&BigUint::from(5u8)).unwrap();
    assert_eq!(g2.checked_add(&g5).unwrap(), g5.checked_add(&g2).unwrap());
    assert_eq!(
        g2.checked_add(&g5).unwrap(),
        G.scalar_mul(&BigUint::from(7u8)).unwrap()
    );
}

#[test]
fn string_constructors_validate_input() {
    assert!(matches!(
        S256Point::from_be_hex("0xnothex", "0x01"),
        Err(ArithmeticError::InvalidHex(_))
    ));
    assert_eq!(
        S256Point::from_be_hex("0x01", "0x01"),
        Err(ArithmeticError::NotOnCurve)
    );
}
