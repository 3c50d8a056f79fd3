//! The principle catalog.
//!
//! Every principle is a static record indexed by its [`PrincipleId`]
//! discriminant, so lookup can never miss. Prose, formulas, slider ranges
//! and practice goals live here; the closed-form physics and renderers live
//! in [`super::scenes`].

use super::error::LabError;
use super::params::{ParamSnapshot, ParamSpec};
use super::practice::{PracticeMode, PracticeSpec};
use super::scenes::{
    circuits, electromagnetism, electrostatics, fluids, heat, mechanics, optics, waves, RenderFn,
};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrincipleId {
    Newton,
    Reaction,
    Buoyancy,
    Lever,
    Pressure,
    Reflection,
    Refraction,
    Ohm,
    Series,
    Capacitor,
    Fuse,
    Coulomb,
    Energy,
    Momentum,
    Circular,
    Projectile,
    Harmonic,
    Wave,
    Doppler,
    Thermal,
    EnergyFlow,
    Magnetic,
    Induction,
}

impl PrincipleId {
    pub const COUNT: usize = 23;

    /// Catalog order.
    pub const ALL: [PrincipleId; Self::COUNT] = [
        PrincipleId::Newton,
        PrincipleId::Reaction,
        PrincipleId::Buoyancy,
        PrincipleId::Lever,
        PrincipleId::Pressure,
        PrincipleId::Reflection,
        PrincipleId::Refraction,
        PrincipleId::Ohm,
        PrincipleId::Series,
        PrincipleId::Capacitor,
        PrincipleId::Fuse,
        PrincipleId::Coulomb,
        PrincipleId::Energy,
        PrincipleId::Momentum,
        PrincipleId::Circular,
        PrincipleId::Projectile,
        PrincipleId::Harmonic,
        PrincipleId::Wave,
        PrincipleId::Doppler,
        PrincipleId::Thermal,
        PrincipleId::EnergyFlow,
        PrincipleId::Magnetic,
        PrincipleId::Induction,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable string id, also used as the DOM key.
    pub fn as_str(self) -> &'static str {
        match self {
            PrincipleId::Newton => "newton",
            PrincipleId::Reaction => "reaction",
            PrincipleId::Buoyancy => "buoyancy",
            PrincipleId::Lever => "lever",
            PrincipleId::Pressure => "pressure",
            PrincipleId::Reflection => "reflection",
            PrincipleId::Refraction => "refraction",
            PrincipleId::Ohm => "ohm",
            PrincipleId::Series => "series",
            PrincipleId::Capacitor => "capacitor",
            PrincipleId::Fuse => "fuse",
            PrincipleId::Coulomb => "coulomb",
            PrincipleId::Energy => "energy",
            PrincipleId::Momentum => "momentum",
            PrincipleId::Circular => "circular",
            PrincipleId::Projectile => "projectile",
            PrincipleId::Harmonic => "harmonic",
            PrincipleId::Wave => "wave",
            PrincipleId::Doppler => "doppler",
            PrincipleId::Thermal => "thermal",
            PrincipleId::EnergyFlow => "energyFlow",
            PrincipleId::Magnetic => "magnetic",
            PrincipleId::Induction => "induction",
        }
    }

    /// Neighbour in catalog order, wrapping at both ends.
    pub fn step(self, delta: i32) -> PrincipleId {
        let n = Self::COUNT as i32;
        let next = (self.index() as i32 + delta).rem_euclid(n);
        Self::ALL[next as usize]
    }
}

impl fmt::Display for PrincipleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrincipleId {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| LabError::UnknownPrinciple(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Mechanics,
    Fluids,
    Optics,
    Circuits,
    Electrostatics,
    Waves,
    Heat,
    Electromagnetism,
}

impl Category {
    /// Outline order.
    pub const ALL: [Category; 8] = [
        Category::Mechanics,
        Category::Fluids,
        Category::Optics,
        Category::Circuits,
        Category::Electrostatics,
        Category::Waves,
        Category::Heat,
        Category::Electromagnetism,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Mechanics => "Mechanics",
            Category::Fluids => "Fluids & Pressure",
            Category::Optics => "Optics",
            Category::Circuits => "Circuits",
            Category::Electrostatics => "Electrostatics",
            Category::Waves => "Waves & Sound",
            Category::Heat => "Heat",
            Category::Electromagnetism => "Electromagnetism & Modern Physics",
        }
    }
}

/// A teachable principle: prose, sliders, live readout, practice goal and
/// renderer.
pub struct Principle {
    pub id: PrincipleId,
    pub name: &'static str,
    pub category: Category,
    /// LaTeX-like markup, see [`super::formula::format_formula`].
    pub formula: &'static str,
    pub formula_detail: &'static str,
    pub summary: &'static str,
    pub teaching_points: &'static [&'static str],
    pub formula_steps: Option<&'static [&'static str]>,
    pub params: &'static [ParamSpec],
    pub details: fn(&ParamSnapshot) -> String,
    pub practice: Option<PracticeSpec>,
    pub textbook: Option<&'static str>,
    pub render: RenderFn,
}

impl Principle {
    pub fn lookup(id: PrincipleId) -> &'static Principle {
        &PRINCIPLES[id.index()]
    }

    pub fn param(&self, id: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.id == id)
    }

    pub fn default_params(&self) -> ParamSnapshot {
        ParamSnapshot::defaults(self.params)
    }
}

const fn absolute(
    prompt: &'static str,
    unit: &'static str,
    targets: &'static [f32],
    tolerance: f32,
    metric: fn(&ParamSnapshot) -> f32,
) -> PracticeSpec {
    PracticeSpec {
        prompt,
        unit,
        targets,
        tolerance,
        mode: PracticeMode::Absolute,
        target_label: None,
        metric,
        format: None,
    }
}

pub static PRINCIPLES: [Principle; PrincipleId::COUNT] = [
    Principle {
        id: PrincipleId::Newton,
        name: "Newton's second law",
        category: Category::Mechanics,
        formula: r"F = m \times a",
        formula_detail: "Find the direction of the net force, add all forces as vectors to get F, then divide by the mass m to get the acceleration a. In one dimension the signs alone carry the direction.",
        summary: "An empty shopping cart and a loaded one pushed with the same force make it obvious: the more mass, the slower it speeds up. Newton's second law ties force to change of motion and is the core tool of dynamics.",
        teaching_points: &[
            "Draw the free-body diagram with directions first, then write F = m·a per axis.",
            "Keep units consistent: newtons (N), kilograms (kg), metres per second squared (m/s²).",
        ],
        formula_steps: Some(&[
            "Step 1: write the force balance and state the size and direction of the net force F.",
            "Step 2: express the mass m in kg, converting from grams where needed.",
            "Step 3: substitute a = F / m and state the value with its direction.",
        ]),
        params: &[
            ParamSpec::new("force", "Pushing force F (N)", (1.0, 10.0, 0.5), 6.0, "N"),
            ParamSpec::new("mass", "Mass m (kg)", (1.0, 5.0, 0.5), 2.0, "kg"),
        ],
        details: mechanics::newton_details,
        practice: Some(absolute(
            "Adjust F and m until the acceleration reaches the target a*",
            "m/s²",
            &[1.5, 2.0, 2.5, 3.2, 3.8],
            0.15,
            mechanics::newton_metric,
        )),
        textbook: Some("Textbooks start from a free-body diagram, resolve the net force along the axes and substitute into F = ma, stressing consistent units and stated directions. Classroom extensions use pushing a crate or a bus pulling away to show that a larger force gives a larger acceleration."),
        render: mechanics::draw_newton,
    },
    Principle {
        id: PrincipleId::Reaction,
        name: "Action and reaction",
        category: Category::Mechanics,
        formula: r"F_{AB} = -F_{BA}",
        formula_detail: "When two bodies interact, the paired forces are equal in size, opposite in direction and act on different bodies. A balloon or rocket expels gas and recoils forward.",
        summary: "The moment a balloon's neck is released the air rushes backwards and the balloon shoots forwards. Newton's third law says that to move ahead you must push something behind you.",
        teaching_points: &[
            "Identify which body each force acts on; never draw both forces of a pair on one free-body diagram.",
            "The reaction does not cancel the action: each force changes the motion of a different body.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("pressure", "Gas pressure (kPa)", (1.0, 5.0, 0.2), 3.0, "kPa"),
            ParamSpec::new("mass", "Balloon mass (g)", (5.0, 30.0, 1.0), 12.0, "g"),
        ],
        details: mechanics::reaction_details,
        practice: Some(absolute(
            "Adjust the pressure and balloon mass for an acceleration of about 6 m/s²",
            "m/s²",
            &[6.0],
            0.3,
            mechanics::reaction_metric,
        )),
        textbook: None,
        render: mechanics::draw_reaction,
    },
    Principle {
        id: PrincipleId::Buoyancy,
        name: "Buoyancy (Archimedes)",
        category: Category::Fluids,
        formula: r"F_{b} = ρ_{fluid} \times g \times V_{disp}",
        formula_detail: "Convert the displaced volume to cubic metres, then multiply by the fluid density and g to get the upward buoyant force. Equal to the weight means the body hovers; larger means it rises.",
        summary: "Archimedes' principle says buoyancy is the weight of the fluid pushed aside. Changing the density or the submerged volume decides whether a body floats, sinks, or how high it rides, the basis of ship and submarine design.",
        teaching_points: &[
            "Compare buoyancy with weight to tell which way the body will move.",
            "Given a floating fraction, ρ_body / ρ_fluid = V_disp / V_total gives the share quickly.",
        ],
        formula_steps: Some(&[
            "1) Convert the volume to m³ and the density to kg/m³.",
            "2) Compute F_b = ρ_fluid g V_disp, and separately G = ρ_body g V_disp.",
            "3) Compare F_b with G: rises, sinks or hovers.",
        ]),
        params: &[
            ParamSpec::new("density", "Body density ρ (g/cm³)", (0.5, 2.0, 0.1), 0.9, "g/cm³"),
            ParamSpec::new("volume", "Displaced volume V (L)", (0.5, 2.5, 0.1), 1.2, "L"),
        ],
        details: fluids::buoyancy_details,
        practice: Some(PracticeSpec {
            prompt: "Make buoyancy and weight almost equal to see the body hover",
            unit: "N",
            targets: &[0.0],
            tolerance: 0.5,
            mode: PracticeMode::DifferenceToZero,
            target_label: Some("buoyancy − weight → 0"),
            metric: fluids::buoyancy_metric,
            format: Some(fluids::format_newtons_1),
        }),
        textbook: Some("Floating-wood and sinking-iron experiments lead to F_b = ρ_fluid g V_disp, and the story of Archimedes stresses that buoyancy comes from the weight of displaced liquid. Typical problems find the displaced volume first and then compare buoyancy with weight."),
        render: fluids::draw_buoyancy,
    },
    Principle {
        id: PrincipleId::Lever,
        name: "Lever principle",
        category: Category::Mechanics,
        formula: r"F_{1} \times L_{1} = F_{2} \times L_{2}",
        formula_detail: "Pair each force with its arm as torque = force × perpendicular distance to the pivot; the lever balances when the torques on both sides are equal.",
        summary: "A lever trades distance for force. Lengthening an arm lets pliers and crowbars multiply effort, all from the same balance of torques.",
        teaching_points: &[
            "The arm is the perpendicular distance to the pivot, not the length along the bar.",
            "With several forces, compute each torque and sum them to find the turning direction.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("leftForce", "Left force F₁ (N)", (1.0, 10.0, 0.5), 4.0, "N"),
            ParamSpec::new("leftArm", "Left arm L₁ (m)", (1.0, 5.0, 0.5), 3.0, "m"),
        ],
        details: mechanics::lever_details,
        practice: Some(absolute(
            "Bring the balancing force needed on the right close to 5 N",
            "N",
            &[5.0],
            0.1,
            mechanics::lever_metric,
        )),
        textbook: Some("Seesaws and spanners illustrate that the lever arm must be measured perpendicular to the force, and torque = force × arm explains the balance condition F₁L₁ = F₂L₂. Exercises classify levers as force-saving or distance-saving and solve for an unknown force or arm."),
        render: mechanics::draw_lever,
    },
    Principle {
        id: PrincipleId::Pressure,
        name: "Fluid pressure (Pascal's law)",
        category: Category::Fluids,
        formula: r"P = ρ \times g \times h",
        formula_detail: "Pressure in a liquid depends only on its density, g and the depth; however complicated the container, the same vertical rule applies.",
        summary: "Pascal's law says pressure is transmitted equally in every direction through a fluid. It explains syringes and hydraulic jacks and is a key safety figure for divers and dam builders.",
        teaching_points: &[
            "Pressure grows in proportion to depth, so deeper dives mean higher pressure.",
            "Extra pressure on the surface, such as from a piston, raises the pressure everywhere in the fluid by the same amount.",
        ],
        formula_steps: Some(&[
            "① Write the density in kg/m³ and the depth in m;",
            "② apply P = ρ g h, adding any external pressure;",
            "③ convert to kPa to compare with atmospheric pressure.",
        ]),
        params: &[
            ParamSpec::new("density", "Liquid density ρ (g/cm³)", (0.8, 1.3, 0.05), 1.0, "g/cm³"),
            ParamSpec::new("depth", "Depth h (m)", (0.5, 15.0, 0.5), 6.0, "m"),
        ],
        details: fluids::pressure_details,
        practice: Some(PracticeSpec {
            prompt: "Adjust ρ and h so the pressure at the bottom is about 120 kPa",
            unit: "Pa",
            targets: &[120000.0],
            tolerance: 6000.0,
            mode: PracticeMode::Absolute,
            target_label: Some("≈120 kPa"),
            metric: fluids::pressure_metric,
            format: Some(fluids::format_kilopascal),
        }),
        textbook: Some("Connected vessels and a hydraulic press demonstrate P = ρgh and that pressure is equal at the same level. Pascal's law then shows how a small input area multiplies the output force; lab steps record liquid heights and gauge readings and discuss the safety valve."),
        render: fluids::draw_pressure,
    },
    Principle {
        id: PrincipleId::Reflection,
        name: "Law of reflection",
        category: Category::Optics,
        formula: "∠i = ∠r",
        formula_detail: "Both angles are measured from the normal. A smooth mirror shows the geometry clearly; a rough surface scatters light diffusely.",
        summary: "In a mirror maze every bounce obeys angle of incidence = angle of reflection, so a laser can be folded back and forth until it hits the target. Measure from the normal and the whole path can be planned.",
        teaching_points: &[
            "Construct the normal first so the angles are easy to read.",
            "Light paths are reversible: a reflected ray sent back retraces its way to the source.",
        ],
        formula_steps: None,
        params: &[ParamSpec::new("angle", "Angle of incidence θi (°)", (0.0, 80.0, 1.0), 35.0, "°")],
        details: optics::reflection_details,
        practice: Some(absolute(
            "Set the angle of incidence to 45° to see equal-angle reflection",
            "°",
            &[45.0],
            1.0,
            optics::reflection_metric,
        )),
        textbook: Some("A ray-box experiment verifies that the incident ray, the reflected ray and the normal lie in one plane with ∠i = ∠r, measuring angles from the normal with a protractor. Extensions cover periscopes and reflector design."),
        render: optics::draw_reflection,
    },
    Principle {
        id: PrincipleId::Refraction,
        name: "Law of refraction",
        category: Category::Optics,
        formula: "n₁ sinθ₁ = n₂ sinθ₂",
        formula_detail: "The refraction angle follows from the indices: θ₂ = arcsin((n₁ / n₂) sinθ₁). At large angles going into a less dense medium, total internal reflection can occur.",
        summary: "A chopstick in a glass of water looks broken because light bends where water meets air. Snell's law predicts exactly which way the ray turns.",
        teaching_points: &[
            "Draw the normal and mark the refraction angle to avoid measuring on the wrong side.",
            "Whether the ray bends toward the normal depends on whether light slows down.",
        ],
        formula_steps: None,
        params: &[ParamSpec::new("angle", "Angle of incidence θ₁ (°)", (0.0, 80.0, 1.0), 30.0, "°")],
        details: optics::refraction_details,
        practice: Some(absolute(
            "Find the angle of incidence that gives a refraction angle of about 22°",
            "°",
            &[22.0],
            1.0,
            optics::refraction_metric,
        )),
        textbook: Some("A glass block and a laser demonstrate refraction and lead to n₁sinθ₁ = n₂sinθ₂, with a discussion of bending toward or away from the normal at a water-air surface. Total internal reflection and optical fibres follow, using tables of refractive indices."),
        render: optics::draw_refraction,
    },
    Principle {
        id: PrincipleId::Ohm,
        name: "Ohm's law",
        category: Category::Circuits,
        formula: r"U = I \times R",
        formula_detail: "Any two of the three quantities give the third. Mind the units: 1 V / 1 Ω = 1 A.",
        summary: "Ohm's law turns circuit analysis from guessing into calculating. For a lamp, a computer or a factory motor, voltage and resistance are enough to estimate brightness, speed and heat.",
        teaching_points: &[
            "Reduce series and parallel networks to one resistance before applying Ohm's law.",
            "Keep connections tight in experiments and put the ammeter in series.",
            "Check the rated current of loads such as computers, fans and lamps before connecting them.",
        ],
        formula_steps: Some(&[
            "I. If R is unknown, reduce the network to its equivalent resistance.",
            "II. Solve for I or U as needed: I = U/R or U = I·R.",
            "III. Check the units: 1 V / 1 Ω = 1 A.",
        ]),
        params: &[
            ParamSpec::new("voltage", "Voltage U (V)", (1.0, 12.0, 1.0), 6.0, "V"),
            ParamSpec::new("resistance", "Resistance R (Ω)", (1.0, 100.0, 1.0), 20.0, "Ω"),
        ],
        details: circuits::ohm_details,
        practice: Some(absolute(
            "Adjust U or R until the current reaches 0.40 A",
            "A",
            &[0.4],
            0.03,
            circuits::ohm_metric,
        )),
        textbook: Some("The Ohm's law experiment records several readings with an ammeter and a voltmeter, plots the U-I graph as a straight line and arrives at U = IR. Wiring, meter ranges and error analysis are stressed, linked to rated currents on appliance labels."),
        render: circuits::draw_ohm,
    },
    Principle {
        id: PrincipleId::Series,
        name: "Simple series circuit",
        category: Category::Circuits,
        formula: r"R_{total} = R_{1} + R_{2} + \cdots",
        formula_detail: "Components in series carry the same current, so their resistances simply add; the voltage drop across each part is proportional to its resistance.",
        summary: "A series circuit is like an assembly line: the current is the same everywhere. With the series rules you can work out lamp brightness, fan speed, or whether chained sensors run safely.",
        teaching_points: &[
            "Find the total resistance first, then I = U / R_total.",
            "The voltage across one part follows the divider rule U_part = I × R_part.",
            "With a lamp and a motor in series the current is shared, so brightness and speed depend on the total resistance.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("r1", "Resistor R₁ (Ω)", (1.0, 60.0, 1.0), 15.0, "Ω"),
            ParamSpec::new("r2", "Resistor R₂ (Ω)", (1.0, 60.0, 1.0), 30.0, "Ω"),
            ParamSpec::new("voltage", "Voltage U (V)", (1.0, 12.0, 1.0), 5.0, "V"),
        ],
        details: circuits::series_details,
        practice: Some(absolute(
            "Make the total resistance 70 Ω and watch the current change",
            "Ω",
            &[70.0],
            1.0,
            circuits::series_metric,
        )),
        textbook: Some("A series circuit is compared with water flowing along a single path: R_total = R₁ + R₂, the current is equal everywhere and the voltage divides in proportion to resistance. Lamps in series are used to measure brightness and check each section's voltage against theory."),
        render: circuits::draw_series,
    },
    Principle {
        id: PrincipleId::Capacitor,
        name: "Capacitor charge and discharge (camera flash)",
        category: Category::Circuits,
        formula: r"Q = C \times U",
        formula_detail: "While charging, the current decays exponentially with time constant τ = R · C; on discharge the stored energy is released as an intense flash or current pulse.",
        summary: "A camera flash charges its capacitor slowly while the ready light brightens, then dumps the stored energy in an instant when the shutter fires.",
        teaching_points: &[
            "While charging i(t) = (U/R)·e^{-t/RC}: a larger R or C charges more slowly.",
            "On discharge the energy W = 0.5 · C · U² turns into light and heat at once.",
            "Slow charge, fast discharge is the classic model of an electronic flash circuit.",
        ],
        formula_steps: Some(&[
            "① Convert C to farads (F) and R to ohms (Ω).",
            "② Compute the time constant τ = R · C, roughly the time to reach 63% charge.",
            "③ On discharge the voltage falls as e^{-t/RC}, which estimates the flash duration.",
        ]),
        params: &[
            ParamSpec::new("capacitance", "Capacitance C (μF)", (100.0, 800.0, 50.0), 400.0, "μF"),
            ParamSpec::new("resistance", "Charging resistance R (kΩ)", (1.0, 20.0, 1.0), 6.0, "kΩ"),
        ],
        details: circuits::capacitor_details,
        practice: Some(absolute(
            "Configure the flash for a charging time constant τ of about 2 s",
            "s",
            &[2.0],
            0.2,
            circuits::capacitor_metric,
        )),
        textbook: Some("A flash circuit combines a high-voltage supply, a capacitor and a xenon tube. The capacitor charges slowly through a current-limiting resistor and the ready light shows when the trigger voltage is reached. Pressing the shutter fires the trigger and the capacitor discharges through the tube, releasing all its energy as a bright flash."),
        render: circuits::draw_capacitor,
    },
    Principle {
        id: PrincipleId::Fuse,
        name: "Short circuit and fuse",
        category: Category::Circuits,
        formula: r"I = \frac{U}{R}, P = I^{2} R",
        formula_detail: "In a short circuit R is tiny, the current far exceeds the fuse rating, and the heat I²R melts the thin wire, opening the circuit.",
        summary: "Short the lamp on the bench and the fuse glows, melts and breaks; the lamp goes dark at once and the battery and wires are saved.",
        teaching_points: &[
            "Household fuses and breakers are chosen by rated current to prevent overload.",
            "A short means a load resistance near zero, so I = U/R becomes huge.",
            "Wear safety glasses in the experiment to guard against sparks and smoke.",
        ],
        formula_steps: Some(&[
            "I. Estimate the actual current with I = U/R.",
            "II. Compare it with the fuse rating: if I exceeds it the fuse melts quickly.",
            "III. Once blown the circuit is open and the lamp or motor loses power.",
        ]),
        params: &[
            ParamSpec::new("voltage", "Supply voltage U (V)", (3.0, 18.0, 1.0), 9.0, "V"),
            ParamSpec::new("load", "Load resistance R (Ω)", (1.0, 40.0, 1.0), 15.0, "Ω"),
            ParamSpec::new("fuseRating", "Fuse rating (A)", (0.5, 5.0, 0.1), 2.0, "A"),
        ],
        details: circuits::fuse_details,
        practice: Some(absolute(
            "Bring I close to the rating without overloading",
            "A",
            &[2.0],
            0.2,
            circuits::fuse_metric,
        )),
        textbook: Some("The fuse explains household circuit safety: in a short or overload the current rises sharply, the thin wire heats, melts and opens the circuit, protecting the other appliances. A clear fuse tube shows the smoke and metal vapour traces after it blows."),
        render: circuits::draw_fuse,
    },
    Principle {
        id: PrincipleId::Coulomb,
        name: "Coulomb's law",
        category: Category::Electrostatics,
        formula: r"F = k \times \frac{|q_{1} q_{2}|}{r^{2}}",
        formula_detail: "Convert charges to coulombs (μC → ×10⁻⁶ C), distance to metres and use k = 8.99×10⁹ N·m²/C² to get the size of the force. The signs decide attraction or repulsion.",
        summary: "Coulomb's law is the gravity law of electrostatics: the closer and the more strongly charged two bodies are, the larger the force. An electroscope shows the repulsion directly.",
        teaching_points: &[
            "The signs of the charges set the direction; the magnitude uses absolute values.",
            "Convert microcoulombs to coulombs before calculating to avoid order-of-magnitude slips.",
        ],
        formula_steps: Some(&[
            "① Convert μC to C (×10⁻⁶).",
            "② Measure r in metres and substitute into F = k|q₁q₂|/r².",
            "③ Read the signs: like charges repel, unlike charges attract.",
        ]),
        params: &[
            ParamSpec::new("q1", "Charge q₁ (μC)", (-5.0, 5.0, 0.5), 3.0, "μC"),
            ParamSpec::new("q2", "Charge q₂ (μC)", (-5.0, 5.0, 0.5), -2.0, "μC"),
            ParamSpec::new("distance", "Separation r (m)", (0.3, 1.5, 0.1), 0.8, "m"),
        ],
        details: electrostatics::coulomb_details,
        practice: Some(PracticeSpec {
            prompt: "Pick q₁, q₂ and r so the electrostatic force is close to 0.20 N",
            unit: "N",
            targets: &[0.2],
            tolerance: 0.02,
            mode: PracticeMode::Absolute,
            target_label: None,
            metric: electrostatics::coulomb_metric,
            format: Some(electrostatics::format_newtons_2),
        }),
        textbook: Some("The Coulomb torsion balance leads to F = k|q₁q₂|/r² and a discussion of the vacuum permittivity. Worked examples convert microcoulombs to coulombs and treat the force as a vector, leading on to field strength and equipotential surfaces."),
        render: electrostatics::draw_coulomb,
    },
    Principle {
        id: PrincipleId::Energy,
        name: "Gravitational potential energy",
        category: Category::Mechanics,
        formula: r"E_{p} = m \times g \times h",
        formula_detail: "Choose the zero level first, then multiply mass, g and height to get the stored energy.",
        summary: "Potential energy is energy stored by position. The more that is stored, the more work it can do when released, from reservoirs and water towers to high diving.",
        teaching_points: &[
            "Measure every height from the same reference level.",
            "For a change in energy use ΔEp = m g Δh directly.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("mass", "Mass m (kg)", (1.0, 5.0, 0.5), 2.5, "kg"),
            ParamSpec::new("height", "Height h (m)", (1.0, 10.0, 0.5), 6.0, "m"),
        ],
        details: mechanics::energy_details,
        practice: Some(absolute(
            "Adjust m and h so the potential energy is about 150 J",
            "J",
            &[150.0],
            5.0,
            mechanics::energy_metric,
        )),
        textbook: Some("Weightlifters and reservoirs illustrate the choice of reference level and the derivation of Ep = mgh. One problem must keep one zero level, and exercises combine energy conservation to track the exchange between potential and kinetic energy."),
        render: mechanics::draw_energy,
    },
    Principle {
        id: PrincipleId::Momentum,
        name: "Conservation of momentum",
        category: Category::Mechanics,
        formula: r"m_{1} v_{1} + m_{2} v_{2} = const",
        formula_detail: "With no external force, or one small enough to ignore, the vector sum of momenta is the same before and after a collision; signs encode direction.",
        summary: "Momentum conservation makes collisions simple: ignore the details of the forces and match before with after. It is also why rockets fly and why pushing someone on ice sends you backwards.",
        teaching_points: &[
            "In one dimension plus and minus signs are enough for direction.",
            "For a perfectly elastic collision, add energy conservation to solve for both velocities.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("mass1", "Cart A mass (kg)", (1.0, 5.0, 0.5), 2.0, "kg"),
            ParamSpec::new("mass2", "Cart B mass (kg)", (1.0, 5.0, 0.5), 3.0, "kg"),
            ParamSpec::new("v1", "Cart A initial speed (m/s)", (1.0, 15.0, 1.0), 8.0, "m/s"),
        ],
        details: mechanics::momentum_details,
        practice: Some(PracticeSpec {
            prompt: "Make the two cart masses nearly equal to see the velocities swap",
            unit: "kg",
            targets: &[0.0],
            tolerance: 0.1,
            mode: PracticeMode::DifferenceToZero,
            target_label: Some("m₁ − m₂ → 0"),
            metric: mechanics::momentum_metric,
            format: Some(mechanics::format_kilograms),
        }),
        textbook: Some("An air-track experiment verifies that m₁v₁ + m₂v₂ stays constant and that velocities swap in a perfectly elastic collision between equal masses. Exercises use signed directions and show that explosions and rocket exhaust obey the same law."),
        render: mechanics::draw_momentum,
    },
    Principle {
        id: PrincipleId::Circular,
        name: "Uniform circular motion",
        category: Category::Mechanics,
        formula: r"a_{c} = \frac{v^{2}}{r}",
        formula_detail: "The speed stays the same but the direction keeps changing, which needs a centripetal acceleration of v²/r or ω²r.",
        summary: "Spin an umbrella fast and drops fly off along the tangent; what you feel as a centrifugal pull is your arm supplying the centripetal force. a_c = v²/r says faster and tighter means more violent flinging.",
        teaching_points: &[
            "Centripetal force is not an extra force: it is the net force that keeps the motion circular.",
            "Smaller radius and higher speed both increase the centripetal acceleration.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("speed", "Speed v (m/s)", (1.0, 20.0, 1.0), 8.0, "m/s"),
            ParamSpec::new("radius", "Radius r (m)", (1.0, 10.0, 0.5), 4.0, "m"),
        ],
        details: mechanics::circular_details,
        practice: Some(absolute(
            "Bring the centripetal acceleration close to 10 m/s²",
            "m/s²",
            &[10.0],
            0.5,
            mechanics::circular_metric,
        )),
        textbook: Some("Because the direction of velocity changes continuously a centripetal force is needed, giving a = v²/r. A whirled stone and a coin on a turntable show where the force comes from, and problems link it to gravity, string tension or static friction."),
        render: mechanics::draw_circular,
    },
    Principle {
        id: PrincipleId::Projectile,
        name: "Projectile motion",
        category: Category::Mechanics,
        formula: r"R = \frac{v^{2} \sin(2\theta)}{g}",
        formula_detail: "Split the launch velocity into horizontal and vertical parts: constant speed sideways, free fall vertically. The range depends on sin 2θ and is longest at 45°.",
        summary: "One decomposition predicts the path of a cannonball, a basketball shot or a water balloon. Knowing the flight time and peak height also makes meeting-point problems quick.",
        teaching_points: &[
            "Convert angles to radians before using trigonometric functions.",
            "When launch and landing heights match, the range formula applies directly.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("speed", "Launch speed v (m/s)", (5.0, 25.0, 1.0), 15.0, "m/s"),
            ParamSpec::new("angle", "Launch angle θ (°)", (10.0, 80.0, 1.0), 40.0, "°"),
        ],
        details: mechanics::projectile_details,
        practice: Some(absolute(
            "Try to reach a range of 20 m",
            "m",
            &[20.0],
            1.5,
            mechanics::projectile_metric,
        )),
        textbook: Some("Resolve the launch velocity, write uniform motion horizontally and free fall vertically, and derive the range R = v²sin2θ/g and the peak height. Problems use throws, cannonballs and fire hoses, with attention to angle conversion and solving for time."),
        render: mechanics::draw_projectile,
    },
    Principle {
        id: PrincipleId::Harmonic,
        name: "Simple harmonic motion",
        category: Category::Waves,
        formula: r"x(t) = A \sin(ω t + φ)",
        formula_detail: "A sets the largest displacement and ω = 2πf the pace; a spring oscillator obeys F = -kx, which gives ω = √(k/m).",
        summary: "Simple harmonic motion is the simplest periodic motion. It describes pendulum clocks, guitar strings and even alternating current; amplitude and frequency explain the back-and-forth exchange of energy.",
        teaching_points: &[
            "Displacement, velocity and acceleration are 90° apart in phase.",
            "Energy swaps periodically between kinetic and potential.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("amplitude", "Amplitude A (px)", (20.0, 80.0, 5.0), 40.0, "px"),
            ParamSpec::new("frequency", "Frequency f (Hz)", (0.5, 2.0, 0.1), 1.2, "Hz"),
        ],
        details: waves::harmonic_details,
        practice: Some(absolute(
            "Set the amplitude to 60 px and watch the energy change",
            "px",
            &[60.0],
            1.0,
            waves::harmonic_metric,
        )),
        textbook: Some("A spring oscillator leads to x = A sin(ωt + φ) with ω = √(k/m). The lab measures the period and plots displacement against time, discussing how energy moves between kinetic and potential forms as the basis for mechanical waves."),
        render: waves::draw_harmonic,
    },
    Principle {
        id: PrincipleId::Wave,
        name: "Superposition of waves",
        category: Category::Waves,
        formula: r"y = y_{1} + y_{2}",
        formula_detail: "In one medium the displacements of several waves simply add; different frequencies or phases give interference patterns or beats.",
        summary: "Superposition explains noise-cancelling headphones and laser interferometers. Once relative phase makes sense, complicated waveforms break down into simple sines.",
        teaching_points: &[
            "In phase they reinforce most; in antiphase they cancel.",
            "The beat frequency f_beat = |f₁ − f₂| is used for tuning.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("frequency", "Frequency f (Hz)", (1.0, 5.0, 0.2), 2.4, "Hz"),
            ParamSpec::new("amplitude", "Amplitude A (px)", (10.0, 60.0, 5.0), 35.0, "px"),
        ],
        details: waves::wave_details,
        practice: Some(absolute(
            "Set both waves to 3 Hz and watch a steady pattern form",
            "Hz",
            &[3.0],
            0.1,
            waves::wave_metric,
        )),
        textbook: Some("A wave demonstrator shows that displacements in one medium add, leading to the interference and beat formulas. Water and sound experiments reveal phase differences, and exercises draw the combined waveform and decide where waves reinforce or cancel."),
        render: waves::draw_wave,
    },
    Principle {
        id: PrincipleId::Doppler,
        name: "Doppler effect",
        category: Category::Waves,
        formula: r"f' = f \times \frac{v}{(v \pm v_{s})}",
        formula_detail: "For an approaching source the denominator is v − vₛ and the pitch rises; for a receding one it is v + vₛ and the pitch falls.",
        summary: "The change in an ambulance siren as it passes is the Doppler effect. Beyond sound, it lets astronomers measure how fast galaxies recede.",
        teaching_points: &[
            "Tell apart the formulas for a moving source and a moving observer.",
            "The optical Doppler effect causes red and blue shifts by the same idea.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("sourceSpeed", "Source speed vₛ (m/s)", (0.0, 60.0, 5.0), 20.0, "m/s"),
            ParamSpec::new("frequency", "Emitted frequency f (Hz)", (220.0, 660.0, 20.0), 440.0, "Hz"),
        ],
        details: waves::doppler_details,
        practice: Some(absolute(
            "Set the source speed to 30 m/s and hear the pitch rise",
            "m/s",
            &[30.0],
            2.0,
            waves::doppler_metric,
        )),
        textbook: Some("A siren experiment and a resonance tube illustrate the Doppler effect, f′ = f·v/(v ± vₛ), and how the frequency changes as the source approaches or recedes. Advanced material extends it to red shift and radar speed guns."),
        render: waves::draw_doppler,
    },
    Principle {
        id: PrincipleId::Thermal,
        name: "Thermal expansion",
        category: Category::Heat,
        formula: r"\Delta L = \alpha \times L_{0} \times \Delta T",
        formula_detail: "The linear expansion coefficient α is the fractional stretch per degree; ΔT may be in Celsius or kelvin.",
        summary: "Bridge joints and rail gaps exist because of thermal expansion. As temperature rises solids lengthen, by an amount linear in both the material and the temperature change.",
        teaching_points: &[
            "Bring millimetres and metres to the same unit before calculating.",
            "For composite materials compute each part separately and add.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("deltaT", "Temperature change ΔT (°C)", (0.0, 80.0, 5.0), 30.0, "°C"),
            ParamSpec::new("alpha", "Expansion coefficient α (×10⁻⁶/°C)", (5.0, 25.0, 1.0), 12.0, "×10⁻⁶"),
        ],
        details: heat::thermal_details,
        practice: Some(absolute(
            "Adjust α and ΔT so that ΔL ≈ 1.2 mm",
            "mm",
            &[1.2],
            0.1,
            heat::thermal_metric,
        )),
        textbook: Some("Heating an iron ring and rod shows ΔL = αL₀ΔT, with a table of expansion coefficients and a reminder that bridges and railways need expansion joints. Exercises estimate gap sizes from the temperature range or judge the risk of buckling."),
        render: heat::draw_thermal,
    },
    Principle {
        id: PrincipleId::EnergyFlow,
        name: "Convective heat flow",
        category: Category::Heat,
        formula: r"Q \propto \Delta T",
        formula_detail: "The larger the temperature difference, the stronger the convection; a real calculation also needs area and flow speed, so here the wave height stands for the heat flow.",
        summary: "Beside a lake or a radiator you can feel the air drifting. Convection carries heat from hot regions to cold ones and drives weather and ocean currents.",
        teaching_points: &[
            "Heating from below, with cold above, sets up convection most easily.",
            "A small temperature difference or a closed space suppresses convection.",
        ],
        formula_steps: None,
        params: &[ParamSpec::new("tempDiff", "Temperature difference ΔT (°C)", (5.0, 30.0, 1.0), 12.0, "°C")],
        details: heat::energy_flow_details,
        practice: Some(absolute(
            "Set the temperature difference to 20°C and watch the heat flow grow",
            "°C",
            &[20.0],
            1.0,
            heat::energy_flow_metric,
        )),
        textbook: Some("Convection is described as bulk fluid flow driven by density differences, shown with radiators and sea breezes, and it grows stronger with the temperature difference. Follow-up work draws heat-flow lines and compares conduction, convection and radiation."),
        render: heat::draw_energy_flow,
    },
    Principle {
        id: PrincipleId::Magnetic,
        name: "Lorentz force on a charge",
        category: Category::Electromagnetism,
        formula: r"F = q \times v \times B \times \sin θ",
        formula_detail: "The force is largest when the velocity is perpendicular to the field; the left-hand rule gives its direction, and it supplies the centripetal force that bends the path.",
        summary: "A magnetic field turns moving charges, the basis of cyclotrons and cathode-ray deflection. Faster charges and stronger fields mean tighter curves.",
        teaching_points: &[
            "With velocity parallel to the field the force is zero.",
            "The orbit radius r = m v / (|q| B): heavier particles are harder to bend.",
        ],
        formula_steps: None,
        params: &[
            ParamSpec::new("velocity", "Speed v (m/s)", (1.0, 20.0, 1.0), 8.0, "m/s"),
            ParamSpec::new("magneticField", "Field strength B (T)", (0.1, 1.0, 0.1), 0.5, "T"),
        ],
        details: electromagnetism::magnetic_details,
        practice: Some(absolute(
            "Raise the Lorentz force to 6 N and watch the orbit tighten",
            "N",
            &[6.0],
            0.3,
            electromagnetism::magnetic_metric,
        )),
        textbook: Some("Charged particles entering a uniform field lead to F = qvB sinθ, with the Lorentz force providing the centripetal force. Mass spectrometers and cyclotrons serve as examples for computing orbit radii from q, v and B."),
        render: electromagnetism::draw_magnetic,
    },
    Principle {
        id: PrincipleId::Induction,
        name: "Electromagnetic induction (Faraday)",
        category: Category::Electromagnetism,
        formula: r"|\varepsilon| = N \times \frac{\Delta Φ}{\Delta t}",
        formula_detail: "The faster the flux through the coil changes, the larger the induced EMF. ΔΦ is roughly B·A, so a faster magnet or more turns gives a higher voltage.",
        summary: "Generators and maglev trains rely on induction: turning motion into electricity needs a changing flux. Here a magnet moving through a coil shows the size of the voltage pulse.",
        teaching_points: &[
            "An EMF appears only while the flux is changing.",
            "Lenz's law: the induced current always opposes the change that causes it.",
        ],
        formula_steps: Some(&[
            "1. Find the flux Φ = B·A·cosθ or its change ΔΦ;",
            "2. the induced EMF is |ε| = N · ΔΦ / Δt;",
            "3. use Lenz's law for the direction.",
        ]),
        params: &[
            ParamSpec::new("speed", "Magnet speed (m/s)", (0.2, 2.0, 0.1), 0.8, "m/s"),
            ParamSpec::new("turns", "Coil turns N", (20.0, 150.0, 5.0), 60.0, "turns"),
        ],
        details: electromagnetism::induction_details,
        practice: Some(PracticeSpec {
            prompt: "Adjust speed and turns for an induced voltage of about 4 V",
            unit: "V",
            targets: &[4.0],
            tolerance: 0.3,
            mode: PracticeMode::Absolute,
            target_label: None,
            metric: electromagnetism::induction_metric,
            format: Some(electromagnetism::format_volts),
        }),
        textbook: Some("Moving a magnet through a coil shows that a changing flux induces an EMF, ε = N·ΔΦ/Δt, with Lenz's law for the direction. Hand-cranked generators and maglev trains are shown as applications."),
        render: electromagnetism::draw_induction,
    },
];

/// One stop on the suggested learning path.
#[derive(Debug)]
pub struct PathNode {
    pub id: &'static str,
    pub label: &'static str,
    pub principles: &'static [PrincipleId],
}

pub static LEARNING_PATH: [PathNode; 8] = [
    PathNode {
        id: "path-mech",
        label: "Mechanics basics",
        principles: &[
            PrincipleId::Newton,
            PrincipleId::Lever,
            PrincipleId::Circular,
            PrincipleId::Projectile,
        ],
    },
    PathNode {
        id: "path-fluid",
        label: "Fluids & pressure",
        principles: &[PrincipleId::Buoyancy, PrincipleId::Pressure],
    },
    PathNode {
        id: "path-energy",
        label: "Energy & work",
        principles: &[PrincipleId::Energy, PrincipleId::EnergyFlow],
    },
    PathNode {
        id: "path-wave",
        label: "Oscillations & waves",
        principles: &[PrincipleId::Harmonic, PrincipleId::Wave, PrincipleId::Doppler],
    },
    PathNode {
        id: "path-optics",
        label: "Geometric optics",
        principles: &[PrincipleId::Reflection, PrincipleId::Refraction],
    },
    PathNode {
        id: "path-electric",
        label: "Intro circuits",
        principles: &[
            PrincipleId::Ohm,
            PrincipleId::Series,
            PrincipleId::Capacitor,
            PrincipleId::Fuse,
        ],
    },
    PathNode {
        id: "path-charge",
        label: "Electrostatics & fields",
        principles: &[PrincipleId::Coulomb],
    },
    PathNode {
        id: "path-magnet",
        label: "Electromagnetic induction",
        principles: &[PrincipleId::Magnetic, PrincipleId::Induction],
    },
];

impl PathNode {
    /// The principle selected when the node is clicked.
    pub fn first(&self) -> Option<PrincipleId> {
        self.principles.first().copied()
    }
}

/// Path nodes that include `id`, for highlighting the active stop.
pub fn path_nodes_containing(id: PrincipleId) -> impl Iterator<Item = &'static PathNode> {
    LEARNING_PATH
        .iter()
        .filter(move |node| node.principles.contains(&id))
}

/// Principles grouped by category in outline order; empty categories are
/// skipped.
pub fn outline() -> Vec<(Category, Vec<PrincipleId>)> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<PrincipleId> = PRINCIPLES
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}
