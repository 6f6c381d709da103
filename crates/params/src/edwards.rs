//! Parameter sets for the twisted Edwards curve family
//!
//! One generic implementation serves every curve here; a parameter record
//! selects the concrete curve. The equation is `a*x^2 + y^2 = 1 + d*x^2*y^2`
//! over the prime field F_p. For each set, `a` is a square and `d` a
//! non-square mod p, so the unified addition formulas are complete.

/// Parameter record for one twisted Edwards curve.
///
/// Big integers are decimal strings (`d` may carry a leading minus sign and
/// is reduced mod p at parse time). `q` is the order of the prime-order
/// subgroup; the full group has order `cofactor * q`.
pub struct EdwardsParams {
    /// Canonical curve name as registered in the suite registry.
    pub name: &'static str,
    /// Size in bytes of an encoded field element, scalar and point.
    pub element_len: usize,
    /// Bit length of the prime modulus.
    pub bits: u32,
    /// Prime modulus p.
    pub p: &'static str,
    /// Order of the prime-order subgroup.
    pub q: &'static str,
    /// Cofactor of the full group.
    pub cofactor: u64,
    /// Curve coefficient a (1 or -1 for the curves in scope).
    pub a: i64,
    /// Curve coefficient d.
    pub d: &'static str,
    /// Base point x-coordinate (generator of the prime-order subgroup).
    pub gx: &'static str,
    /// Base point y-coordinate.
    pub gy: &'static str,
}

/// Curve1174: p = 2^251 - 9, d = -1174, cofactor 4.
pub const CURVE1174: EdwardsParams = EdwardsParams {
    name: "Curve1174",
    element_len: 32,
    bits: 251,
    p: "3618502788666131106986593281521497120414687020801267626233049500247285301239",
    q: "904625697166532776746648320380374280092339035279495474023489261773642975601",
    cofactor: 4,
    a: 1,
    d: "-1174",
    gx: "1582619097725911541954547006453739763381091388846394833492296309729998839514",
    gy: "3037538013604154504764115728651437646519513534305223422754827055689195992590",
};

/// Curve41417: p = 2^414 - 17, d = 3617, cofactor 8.
pub const CURVE41417: EdwardsParams = EdwardsParams {
    name: "Curve41417",
    element_len: 52,
    bits: 414,
    p: "42307582002575910332922579714097346549017899709713998034217522897561970639123926132812109468141778230245837569601494931472367",
    q: "5288447750321988791615322464262168318627237463714249754277190328831105466135348245791335989419337099796002495788978276839289",
    cofactor: 8,
    a: 1,
    d: "3617",
    gx: "17319886477121189177719202498822615443556957307604340815256226171904769976866975908866528699294134494857887698432266169206165",
    gy: "34",
};

/// E-382: p = 2^382 - 105, d = -67254, cofactor 4.
pub const E382: EdwardsParams = EdwardsParams {
    name: "E382",
    element_len: 48,
    bits: 382,
    p: "9850501549098619803069760025035903451269934817616361666987073351061430442874302652853566563721228910201656997576599",
    q: "2462625387274654950767440006258975862817483704404090416745738034557663054564649171262659326683244604346084081047321",
    cofactor: 4,
    a: 1,
    d: "-67254",
    gx: "3914921414754292646847594472454013487047137431784830634731377862923477302047857640522480241298429278603678181725699",
    gy: "17",
};

/// E-521: p = 2^521 - 1, d = -376014, cofactor 4.
pub const E521: EdwardsParams = EdwardsParams {
    name: "E521",
    element_len: 66,
    bits: 521,
    p: "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151",
    q: "1716199415032652428745475199770348304317358825035826352348615864796385795849413675475876651663657849636693659065234142604319282948702542317993421293670108523",
    cofactor: 4,
    a: 1,
    d: "-376014",
    gx: "1571054894184995387535939749894317568645297350402905821437625181152304994381188529632591196067604100772673927915114267193389905003276673749012051148356041324",
    gy: "12",
};

/// An Ed25519-compatible parameter set for the generic implementation:
/// p = 2^255 - 19, a = -1, d = -121665/121666, cofactor 8.
pub const TWISTED25519: EdwardsParams = EdwardsParams {
    name: "Twisted25519",
    element_len: 32,
    bits: 255,
    p: "57896044618658097711785492504343953926634992332820282019728792003956564819949",
    q: "7237005577332262213973186563042994240857116359379907606001950938285454250989",
    cofactor: 8,
    a: -1,
    d: "37095705934669439343138083508754565189542113879843219016388785533085940283555",
    gx: "15112221349535400772501151409588531511454012693041857206046113283949847762202",
    gy: "46316835694926478169428394003475163141307993866256225615783033603165251855960",
};
