// Simplex noise in 2, 3 and 4 dimensions, after Stefan Gustavson's
// "Simplex noise demystified". Simplex divides space into triangles
// (tetrahedra, 5-cells) rather than squares, which gives better isotropy
// and fewer corners to visit than lattice gradient noise.

// Permutation of 0..=255
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

// Permutation duplicated to 512 entries so sums of two bytes never wrap
static PERMS: [u8; 512] = double_perm();

// PERMS mod 12, for picking one of the 12 gradients of GRAD3
static PERMS12: [u8; 512] = perms_mod12();

// Edge midpoints of a cube, shared by the 2D and 3D samplers
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

const GRAD4: [[f64; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, -1.0],
    [0.0, 1.0, -1.0, 1.0],
    [0.0, 1.0, -1.0, -1.0],
    [0.0, -1.0, 1.0, 1.0],
    [0.0, -1.0, 1.0, -1.0],
    [0.0, -1.0, -1.0, 1.0],
    [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, -1.0],
    [1.0, 0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0, -1.0],
    [-1.0, 0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0, 1.0],
    [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, -1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, -1.0],
    [-1.0, -1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 1.0, -1.0, 0.0],
    [1.0, -1.0, 1.0, 0.0],
    [1.0, -1.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0, 0.0],
    [-1.0, 1.0, -1.0, 0.0],
    [-1.0, -1.0, 1.0, 0.0],
    [-1.0, -1.0, -1.0, 0.0],
];

// Traversal order of the 4D simplex corners, indexed by the six pairwise
// coordinate comparisons. Each row holds 0..=3 ranking the axes; rows that
// no ordering can produce are zero.
const SIMPLEX4: [[u8; 4]; 64] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 0, 0, 0], [0, 2, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 2, 3, 0],
    [0, 2, 1, 3], [0, 0, 0, 0], [0, 3, 1, 2], [0, 3, 2, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 3, 2, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [1, 2, 0, 3], [0, 0, 0, 0], [1, 3, 0, 2], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [1, 0, 2, 3], [1, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [2, 0, 3, 1], [0, 0, 0, 0], [2, 1, 3, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [2, 0, 1, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [0, 0, 0, 0], [3, 1, 2, 0],
    [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 1, 0, 2], [0, 0, 0, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

// SIMPLEX4 with each rank r turned into the mask (1 << r) - 1, so the
// corner offsets fall out of shifts: bit 2 marks the largest axis, bit 1
// the two largest, bit 0 the three largest.
static SIMPLEX4_MASKS: [[u8; 4]; 64] = simplex4_masks();

const fn double_perm() -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = PERM[i & 255];
        i += 1;
    }
    out
}

const fn perms_mod12() -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = PERM[i & 255] % 12;
        i += 1;
    }
    out
}

const fn simplex4_masks() -> [[u8; 4]; 64] {
    let mut out = [[0u8; 4]; 64];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 4 {
            out[i][j] = (1u8 << SIMPLEX4[i][j]) - 1;
            j += 1;
        }
        i += 1;
    }
    out
}

// Radially symmetric falloff: zero once the squared distance reaches `radius_sq`
#[inline]
fn falloff(radius_sq: f64, dist_sq: f64) -> f64 {
    let t = radius_sq - dist_sq;
    if t <= 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2
    }
}

#[inline]
fn lattice(v: f64) -> usize {
    (v as i64 & 0xff) as usize
}

// 2D contribution of one corner
#[inline]
fn corner2(i: usize, j: usize, x: f64, y: f64) -> f64 {
    let f = falloff(0.5, x * x + y * y);
    if f == 0.0 {
        return 0.0;
    }
    let g = GRAD3[PERMS12[i + PERMS[j] as usize] as usize];
    f * (g[0] * x + g[1] * y)
}

// Raw 2D simplex noise, roughly [-1, 1]
pub fn sample2(x: f64, y: f64) -> f64 {
    // (sqrt(3) - 1) / 2 squashes the square grid into a rhombus of
    // equilateral triangles, (3 - sqrt(3)) / 6 reverses it
    const F2: f64 = 0.366_025_403_784_438_6;
    const G2: f64 = 0.211_324_865_405_187_1;
    const G2_FAR: f64 = 2.0 * G2 - 1.0;

    // Skew input space to find the containing cell
    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();

    // Unskew the cell origin back to (x, y) space
    let t = (i + j) * G2;
    let x0 = x + t - i;
    let y0 = y + t - j;

    let ii = lattice(i);
    let jj = lattice(j);

    // Lower or upper triangle of the rhombus
    let xi = usize::from(x0 >= y0);
    let yi = 1 - xi;

    let n0 = corner2(ii, jj, x0, y0);
    let n1 = corner2(
        ii + xi,
        jj + yi,
        x0 + G2 - xi as f64,
        y0 + G2 - yi as f64,
    );
    let n2 = corner2(ii + 1, jj + 1, x0 + G2_FAR, y0 + G2_FAR);

    70.0 * (n0 + n1 + n2)
}

#[inline]
fn corner3(i: usize, j: usize, k: usize, x: f64, y: f64, z: f64) -> f64 {
    let f = falloff(0.6, x * x + y * y + z * z);
    if f == 0.0 {
        return 0.0;
    }
    let g = GRAD3[PERMS12[i + PERMS[j + PERMS[k] as usize] as usize] as usize];
    f * (g[0] * x + g[1] * y + g[2] * z)
}

// Raw 3D simplex noise, roughly [-1, 1]
pub fn sample3(x: f64, y: f64, z: f64) -> f64 {
    const F3: f64 = 1.0 / 3.0;
    const G3: f64 = 1.0 / 6.0;
    const G3_2: f64 = 2.0 * G3;
    const G3_FAR: f64 = 3.0 * G3 - 1.0;

    let s = (x + y + z) * F3;
    let i = (x + s).floor();
    let j = (y + s).floor();
    let k = (z + s).floor();

    let t = (i + j + k) * G3;
    let x0 = x + t - i;
    let y0 = y + t - j;
    let z0 = z + t - k;

    // Pick the tetrahedron from the ordering of the offsets
    let yx = usize::from(x0 >= y0);
    let zy = usize::from(y0 >= z0);
    let zx = usize::from(x0 >= z0);

    // second corner: one step along the largest axis
    let i1 = yx & (zy | zx);
    let j1 = (1 - yx) & zy;
    let k1 = (1 - zy) & (1 - (yx & zx));

    // third corner: one step along each of the two largest axes
    let i2 = yx | (zy & zx);
    let j2 = (1 - yx) | zy;
    let k2 = 1 - (zy & zx);

    let ii = lattice(i);
    let jj = lattice(j);
    let kk = lattice(k);

    let n0 = corner3(ii, jj, kk, x0, y0, z0);
    let n1 = corner3(
        ii + i1,
        jj + j1,
        kk + k1,
        x0 + G3 - i1 as f64,
        y0 + G3 - j1 as f64,
        z0 + G3 - k1 as f64,
    );
    let n2 = corner3(
        ii + i2,
        jj + j2,
        kk + k2,
        x0 + G3_2 - i2 as f64,
        y0 + G3_2 - j2 as f64,
        z0 + G3_2 - k2 as f64,
    );
    let n3 = corner3(ii + 1, jj + 1, kk + 1, x0 + G3_FAR, y0 + G3_FAR, z0 + G3_FAR);

    23.0 * (n0 + n1 + n2 + n3)
}

#[inline]
fn corner4(idx: [usize; 4], p: [f64; 4]) -> f64 {
    let f = falloff(0.6, p[0] * p[0] + p[1] * p[1] + p[2] * p[2] + p[3] * p[3]);
    if f == 0.0 {
        return 0.0;
    }
    let h = PERMS[idx[0]
        + PERMS[idx[1] + PERMS[idx[2] + PERMS[idx[3]] as usize] as usize] as usize];
    let g = GRAD4[(h & 0x1f) as usize];
    f * (g[0] * p[0] + g[1] * p[1] + g[2] * p[2] + g[3] * p[3])
}

// Raw 4D simplex noise, roughly [-1, 1]
pub fn sample4(x: f64, y: f64, z: f64, w: f64) -> f64 {
    // (sqrt(5) - 1) / 4 and (5 - sqrt(5)) / 20
    const F4: f64 = 0.309_016_994_374_947_45;
    const G4: f64 = 0.138_196_601_125_010_5;

    let s = (x + y + z + w) * F4;
    let cell = [
        (x + s).floor(),
        (y + s).floor(),
        (z + s).floor(),
        (w + s).floor(),
    ];

    let t = (cell[0] + cell[1] + cell[2] + cell[3]) * G4;
    let p0 = [x + t - cell[0], y + t - cell[1], z + t - cell[2], w + t - cell[3]];

    // Six pairwise comparisons pick one of the 24 possible simplices
    let c = (usize::from(p0[0] >= p0[1]) << 5)
        | (usize::from(p0[0] >= p0[2]) << 4)
        | (usize::from(p0[1] >= p0[2]) << 3)
        | (usize::from(p0[0] >= p0[3]) << 2)
        | (usize::from(p0[1] >= p0[3]) << 1)
        | usize::from(p0[2] >= p0[3]);
    let masks = SIMPLEX4_MASKS[c];

    let base = cell.map(lattice);
    let mut total = corner4(base, p0);

    // Corners 1..=3 step along the largest, two largest and three largest axes
    for (step, shift) in [(1.0, 2u8), (2.0, 1), (3.0, 0)] {
        let offs = masks.map(|m| ((m >> shift) & 1) as usize);
        let idx = [
            base[0] + offs[0],
            base[1] + offs[1],
            base[2] + offs[2],
            base[3] + offs[3],
        ];
        let g = step * G4;
        let p = [
            p0[0] + g - offs[0] as f64,
            p0[1] + g - offs[1] as f64,
            p0[2] + g - offs[2] as f64,
            p0[3] + g - offs[3] as f64,
        ];
        total += corner4(idx, p);
    }

    let far = 4.0 * G4 - 1.0;
    total += corner4(
        [base[0] + 1, base[1] + 1, base[2] + 1, base[3] + 1],
        p0.map(|v| v + far),
    );

    27.0 * total
}
