use modint::{BinaryOp, ConversionPolicy, ModInt, ModIntError, Operand};
use num_traits::Pow;

fn main() -> Result<(), ModIntError> {
    // You can build a value by yourself, it is reduced into `[0, modulus)`
    let a = ModInt::new(-3, 10)?;
    println!("{a} / {a:?}");

    // Same-modulus arithmetic stays in the system
    let b = ModInt::new(9, 10)?;
    println!("{a:?} + {b:?} = {:?}", &a + &b);
    println!("{a:?} * {b:?} = {:?}", &a * &b);

    // Multiplying by a plain integer scales the modulus, dividing shrinks it back
    let scaled = &a * 3;
    println!("{a:?} * 3 = {scaled:?}");
    println!("{scaled:?} / 3 = {:?}", &scaled / 3);

    // Negative exponents need an invertible value
    println!("{a:?} ** -1 = {:?}", (&a).pow(-1));
    if let Err(err) = ModInt::new(4, 10)?.try_pow(-1) {
        println!("{err}");
    }

    // Plain integers join additions and comparisons only if the policy allows it
    let policy = ConversionPolicy::new(false);
    if let Err(err) = a.add_with(5, &policy) {
        println!("{err}");
    }
    println!("{a:?} == 17 under a closed policy: {}", a.eq_with(17, &policy));
    policy.enable();
    println!("{a:?} == 17 under an open policy: {}", a.eq_with(17, &policy));

    // Operations can also be dispatched dynamically
    let outcome = a.apply_with(BinaryOp::Sub, &[Operand::from(1.9)], &policy)?;
    println!("{a:?} - 1.9 = {outcome:?}");

    // Rendering
    println!("{}", a.to_str_radix(2)?);
    println!("{}", a.parametric("k")?);

    Ok(())
}
