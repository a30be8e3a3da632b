pub mod ratcliff_obershelp;
