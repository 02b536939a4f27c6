//! User-facing strings. They are shown verbatim and stay in Indonesian to match
//! the page copy.

pub const INVALID_EMAIL: &str = "Email tidak valid";
pub const SIGN_IN_PASSWORD_TOO_SHORT: &str = "Password minimal 6 karakter";
pub const FIRST_NAME_TOO_SHORT: &str = "Nama depan minimal 2 karakter";
pub const LAST_NAME_TOO_SHORT: &str = "Nama belakang minimal 2 karakter";
pub const USER_TYPE_REQUIRED: &str = "Pilih tipe pengguna";
pub const WEAK_PASSWORD: &str =
    "Password minimal 8 karakter, harus mengandung huruf besar, huruf kecil, dan angka";
pub const PASSWORD_MISMATCH: &str = "Password tidak cocok";
pub const TERMS_REQUIRED: &str = "Anda harus menyetujui Syarat & Ketentuan";

pub const SIGN_IN_BUSY: &str = "Memproses...";
pub const REGISTER_BUSY: &str = "Mendaftar...";

pub const SIGN_IN_SUCCESS: &str = "Login berhasil! (Demo)";
pub const REGISTER_SUCCESS: &str =
    "Pendaftaran berhasil! Silakan cek email Anda untuk verifikasi. (Demo)";
pub const SUBMIT_FAILED: &str = "Terjadi kesalahan, silakan coba lagi";

#[must_use]
pub fn social_success(provider_name: &str) -> String {
    format!("Login dengan {provider_name} (Demo)")
}
