use ek_electrostatics::fields::{k, LineChargePair, PairField};
use ek_electrostatics::materials::Medium;
use ek_electrostatics::sweep::{sample_field_map, GridSpec};

fn main() -> Result<(), ek_electrostatics::errors::ElectrostaticsError> {
    // Saturated clay cell: electrodes 0.2 m apart on the x = 0 line.
    let soil = Medium::new(30.0)?; // εr ≈ 30
    let pair = LineChargePair::new(0.0, 0.1, -0.1);
    let charge = 1.0e-9; // C/m
    let source = PairField::from_charge(pair, charge, &soil);

    println!("k = {:.6e} V", k(charge, soil.relative_permittivity));

    let grid = GridSpec {
        x_min: 0.02,
        x_max: 0.2,
        nx: 5,
        z_min: -0.05,
        z_max: 0.05,
        nz: 3,
    };
    let map = sample_field_map(&source, &grid)?;

    println!("x(m), z(m), V(V), Ex(V/m), Ez(V/m), |E|(V/m)");
    for s in map {
        println!(
            "{:.4}, {:.4}, {:.6e}, {:.6e}, {:.6e}, {:.6e}",
            s.point.x, s.point.y, s.voltage, s.field.x, s.field.y, s.magnitude
        );
    }
    Ok(())
}
