//! Built-in license list used when no catalog file is configured

/// `(key, name, category)` triples in display order
pub(super) const BUILTIN_LICENSES: &[(&str, &str, &str)] = &[
    ("MIT", "MIT License", "permissive"),
    ("Apache-2.0", "Apache License 2.0", "permissive"),
    ("BSD-2-Clause", "BSD 2-Clause \"Simplified\" License", "permissive"),
    ("BSD-3-Clause", "BSD 3-Clause \"New\" or \"Revised\" License", "permissive"),
    ("ISC", "ISC License", "permissive"),
    ("0BSD", "BSD Zero Clause License", "permissive"),
    ("Zlib", "zlib License", "permissive"),
    ("Unlicense", "The Unlicense", "public-domain"),
    ("CC0-1.0", "Creative Commons Zero v1.0 Universal", "public-domain"),
    ("BSL-1.0", "Boost Software License 1.0", "permissive"),
    ("PostgreSQL", "PostgreSQL License", "permissive"),
    ("Python-2.0", "Python License 2.0", "permissive"),
    ("MPL-2.0", "Mozilla Public License 2.0", "weak-copyleft"),
    ("EPL-2.0", "Eclipse Public License 2.0", "weak-copyleft"),
    ("LGPL-2.1-only", "GNU Lesser General Public License v2.1 only", "weak-copyleft"),
    ("LGPL-2.1-or-later", "GNU Lesser General Public License v2.1 or later", "weak-copyleft"),
    ("LGPL-3.0-only", "GNU Lesser General Public License v3.0 only", "weak-copyleft"),
    ("LGPL-3.0-or-later", "GNU Lesser General Public License v3.0 or later", "weak-copyleft"),
    ("GPL-2.0-only", "GNU General Public License v2.0 only", "copyleft"),
    ("GPL-2.0-or-later", "GNU General Public License v2.0 or later", "copyleft"),
    ("GPL-3.0-only", "GNU General Public License v3.0 only", "copyleft"),
    ("GPL-3.0-or-later", "GNU General Public License v3.0 or later", "copyleft"),
    ("AGPL-3.0-only", "GNU Affero General Public License v3.0 only", "copyleft"),
    ("AGPL-3.0-or-later", "GNU Affero General Public License v3.0 or later", "copyleft"),
    ("EUPL-1.2", "European Union Public License 1.2", "copyleft"),
    ("CC-BY-4.0", "Creative Commons Attribution 4.0 International", "permissive"),
    ("CC-BY-SA-4.0", "Creative Commons Attribution Share Alike 4.0 International", "copyleft"),
    ("BUSL-1.1", "Business Source License 1.1", "source-available"),
    ("SSPL-1.0", "Server Side Public License, v 1", "source-available"),
    ("Elastic-2.0", "Elastic License 2.0", "source-available"),
    ("Commons-Clause", "Commons Clause License Condition v1.0", "proprietary"),
    ("LicenseRef-Proprietary", "Proprietary license", "proprietary"),
    ("Classpath-exception-2.0", "Classpath exception 2.0", "exception"),
    ("LLVM-exception", "LLVM Exception", "exception"),
    ("GCC-exception-3.1", "GCC Runtime Library exception 3.1", "exception"),
    ("Autoconf-exception-3.0", "Autoconf exception 3.0", "exception"),
    ("Bison-exception-2.2", "Bison exception 2.2", "exception"),
    ("OpenJDK-assembly-exception-1.0", "OpenJDK Assembly exception 1.0", "exception"),
    ("Linux-syscall-note", "Linux Syscall Note", "exception"),
    ("Qt-LGPL-exception-1.1", "Qt LGPL exception 1.1", "exception"),
];
